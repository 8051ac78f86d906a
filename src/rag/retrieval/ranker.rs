//! Cosine ranking of a query against every indexed document
use serde::{Deserialize, Serialize};

use crate::rag::retrieval::index::TfIdfIndex;

/// Relevance of one corpus position for one query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Position of the record in the corpus
    pub position: usize,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}

/// Score a query against every document, in corpus order.
///
/// Always returns one entry per indexed document. A query with no
/// in-vocabulary terms scores 0 everywhere.
pub fn score(index: &TfIdfIndex, query: &str) -> Vec<ScoredDocument> {
    let query_vector = index.vectorize(query);

    index
        .documents()
        .iter()
        .enumerate()
        .map(|(position, doc)| ScoredDocument {
            position,
            score: query_vector.cosine(doc),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TfIdfIndex {
        TfIdfIndex::from_texts([
            "Tokyo city of temples and technology Shibuya Asakusa",
            "Paris city of lights Eiffel Tower",
        ])
    }

    #[test]
    fn test_one_entry_per_document_in_order() {
        let scores = score(&index(), "city");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].position, 0);
        assert_eq!(scores[1].position, 1);
    }

    #[test]
    fn test_matching_document_scores_higher() {
        let scores = score(&index(), "Tokyo temples");
        assert!(scores[0].score > 0.0);
        assert_eq!(scores[1].score, 0.0);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        for query in ["city", "tokyo city lights", "eiffel", "xyz"] {
            for entry in score(&index(), query) {
                assert!((0.0..=1.0).contains(&entry.score), "{query}: {}", entry.score);
            }
        }
    }

    #[test]
    fn test_out_of_vocabulary_query() {
        let scores = score(&index(), "snorkelling lagoon");
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_stop_word_query() {
        let scores = score(&index(), "the of and");
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_empty_index() {
        let empty = TfIdfIndex::from_texts(Vec::<&str>::new());
        assert!(score(&empty, "tokyo").is_empty());
    }
}
