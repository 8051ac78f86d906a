//! TF-IDF index over projected destination text
//!
//! Weighting follows the smoothed scheme:
//!
//! - `tf(t, d)`: raw count of `t` in `d`
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//! - each document vector is L2-normalised
//!
//! The vocabulary is kept sorted, so term ids and vector layouts are the same
//! on every rebuild of the same corpus.

use std::collections::BTreeMap;
use tracing::debug;

use crate::corpus::Record;
use crate::rag::retrieval::tokenizer::tokenize;

/// Sparse term-weight vector: `(term_id, weight)` sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_sorted(entries: Vec<(usize, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.norm() == 0.0
    }

    /// Dot product via a merge over both sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity in [0, 1]; zero when either side has no magnitude
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let (na, nb) = (self.norm(), other.norm());
        if na == 0.0 || nb == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (na * nb)).clamp(0.0, 1.0)
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// Immutable TF-IDF index, one vector per corpus position
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

impl TfIdfIndex {
    /// Index every record's projected text
    pub fn build<R: Record>(records: &[R]) -> Self {
        Self::from_texts(records.iter().map(R::projected_text))
    }

    /// Index raw document texts, in order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let term_counts: Vec<BTreeMap<String, u32>> = texts
            .into_iter()
            .map(|text| count_terms(tokenize(text.as_ref())))
            .collect();

        let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = term_counts.len() as f64;
        let vocabulary: BTreeMap<String, usize> = document_frequency
            .keys()
            .enumerate()
            .map(|(id, term)| (term.to_string(), id))
            .collect();
        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            documents: Vec::with_capacity(term_counts.len()),
        };
        index.documents = term_counts
            .iter()
            .map(|counts| index.weigh(counts))
            .collect();

        debug!(
            documents = index.documents.len(),
            vocabulary = index.vocabulary.len(),
            "tf-idf index built"
        );
        index
    }

    /// Project a query into this index's vocabulary. Unknown terms are dropped.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        self.weigh(&count_terms(tokenize(text)))
    }

    /// Vector of the document at a corpus position
    pub fn document(&self, position: usize) -> Option<&SparseVector> {
        self.documents.get(position)
    }

    pub fn documents(&self) -> &[SparseVector] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Smoothed idf of a vocabulary term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }

    fn weigh(&self, counts: &BTreeMap<String, u32>) -> SparseVector {
        // counts iterate in term order, which is term-id order
        let entries = counts
            .iter()
            .filter_map(|(term, &tf)| {
                self.vocabulary
                    .get(term)
                    .map(|&id| (id, tf as f64 * self.idf[id]))
            })
            .collect();
        SparseVector::from_sorted(entries).normalized()
    }
}

fn count_terms(tokens: Vec<String>) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
