//! Record store: the immutable, ordered destination collection
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

use crate::corpus::record::Destination;
use crate::errors::{Result, TravelError};

/// On-disk corpus document: `{"destinations": [...]}`
#[derive(Debug, Deserialize)]
struct CorpusDocument {
    destinations: Vec<Destination>,
}

/// Ordered, read-only collection of destinations
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Destination>,
}

impl RecordStore {
    /// Load a corpus file. Missing or malformed files are fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TravelError::CorpusLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), records = store.len(), "corpus loaded");
        Ok(store)
    }

    /// Parse a corpus document from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CorpusDocument =
            serde_json::from_reader(reader).map_err(TravelError::CorpusParse)?;

        if document.destinations.is_empty() {
            warn!("corpus contains no destinations; every query will come back empty");
        }

        Ok(Self::from_records(document.destinations))
    }

    /// Wrap records already in memory, keeping their order
    pub fn from_records(records: Vec<Destination>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a corpus position
    pub fn get(&self, position: usize) -> Option<&Destination> {
        self.records.get(position)
    }

    pub fn records(&self) -> &[Destination] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "destinations": [
            {"destination": "Tokyo", "description": "city of temples and technology",
             "top_attractions": ["Shibuya", "Asakusa"]},
            {"destination": "Paris", "description": "city of lights",
             "top_attractions": ["Eiffel Tower"]}
        ]
    }"#;

    #[test]
    fn test_from_reader_preserves_order() {
        let store = RecordStore::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().destination, "Tokyo");
        assert_eq!(store.get(1).unwrap().destination, "Paris");
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RecordStore::load("/definitely/not/here/travel_data.json");
        assert!(matches!(result, Err(TravelError::CorpusLoad { .. })));
    }

    #[test]
    fn test_malformed_corpus() {
        let result = RecordStore::from_reader(r#"{"places": []}"#.as_bytes());
        assert!(matches!(result, Err(TravelError::CorpusParse(_))));

        let result = RecordStore::from_reader("not json".as_bytes());
        assert!(matches!(result, Err(TravelError::CorpusParse(_))));
    }

    #[test]
    fn test_empty_corpus_is_valid() {
        let store = RecordStore::from_reader(r#"{"destinations": []}"#.as_bytes()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
