// Top-k selection over ranked documents
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::rag::retrieval::ScoredDocument;

/// Default number of destinations handed to the model
pub const DEFAULT_TOP_K: usize = 2;

/// Selection parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParams {
    /// Maximum number of results to keep
    pub top_k: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// A selected record, borrowed from the store it was ranked against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedRecord<'a, R> {
    pub position: usize,
    pub score: f64,
    pub record: &'a R,
}

/// Keep positive scores, order by score descending then corpus position
/// ascending, and truncate to `k`.
pub fn select_top_k(mut scores: Vec<ScoredDocument>, k: usize) -> Vec<ScoredDocument> {
    scores.retain(|s| s.score > 0.0);
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.position.cmp(&b.position))
    });
    scores.truncate(k);
    scores
}

/// Selector bound to a set of parameters
#[derive(Debug, Clone, Default)]
pub struct Selector {
    params: SelectionParams,
}

impl Selector {
    pub fn new(params: SelectionParams) -> Self {
        Self { params }
    }

    /// Select and attach records. Positions missing from `records` are skipped.
    pub fn select<'a, R>(
        &self,
        scores: Vec<ScoredDocument>,
        records: &'a [R],
    ) -> Vec<SelectedRecord<'a, R>> {
        select_top_k(scores, self.params.top_k)
            .into_iter()
            .filter_map(|s| {
                records.get(s.position).map(|record| SelectedRecord {
                    position: s.position,
                    score: s.score,
                    record,
                })
            })
            .collect()
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SelectionParams) {
        self.params = params;
    }
}
