use serde::{Deserialize, Serialize};

use crate::types::identifiers::Term;

/// Contribution of one distinct document term to the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: Term,
    pub count: usize,
    pub tf: f64,
    pub document_frequency: u64,
    pub idf: f64,
    pub weight: f64,
}

/// Explanation of a score: every term weight, in ascending term order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub terms: Vec<TermWeight>,
    pub total_terms: usize,
    pub document_count: u64,
    pub score: f64,
    /// Sum of the weights of terms that occur in at least one corpus document.
    pub matched_weight: f64,
}

impl ScoreDetails {
    pub fn empty(document_count: u64) -> Self {
        Self {
            terms: Vec::new(),
            total_terms: 0,
            document_count,
            score: 0.0,
            matched_weight: 0.0,
        }
    }

    pub fn distinct_terms(&self) -> usize {
        self.terms.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Invalid argument: {0} must be present")]
    InvalidArgument(&'static str),
}
