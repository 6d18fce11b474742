use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::text::TermCounts;
use crate::types::identifiers::Term;

/// Document count and per-term document frequencies.
///
/// Grows only: there is no way to remove a document once added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    document_count: u64,
    document_frequency: BTreeMap<Term, u64>,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document. Each distinct term counts once, however often it occurs.
    pub fn add(&mut self, counts: &TermCounts) {
        self.document_count += 1;
        for term in counts.terms() {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
    }

    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    pub fn document_frequency(&self, term: &Term) -> u64 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }

    /// Smoothed IDF: `ln((1 + N) / (1 + df)) + 1`.
    ///
    /// Finite and positive for every term, including unseen terms and an empty corpus.
    pub fn inverse_document_frequency(&self, term: &Term) -> f64 {
        smoothed_idf(self.document_count, self.document_frequency(term))
    }

    pub fn snapshot(&self) -> CorpusSnapshot {
        CorpusSnapshot {
            document_count: self.document_count,
            document_frequency: self.document_frequency.clone(),
        }
    }

    pub fn from_snapshot(snapshot: CorpusSnapshot) -> Result<Self, SnapshotError> {
        for (term, df) in &snapshot.document_frequency {
            if *df == 0 || *df > snapshot.document_count {
                return Err(SnapshotError::FrequencyOutOfRange {
                    term: term.as_str().to_string(),
                    frequency: *df,
                    document_count: snapshot.document_count,
                });
            }
        }

        Ok(Self {
            document_count: snapshot.document_count,
            document_frequency: snapshot.document_frequency,
        })
    }
}

#[inline]
pub(crate) fn smoothed_idf(document_count: u64, document_frequency: u64) -> f64 {
    let numerator = 1.0 + document_count as f64;
    let denominator = 1.0 + document_frequency as f64;
    (numerator / denominator).ln() + 1.0
}

/// Serializable copy of the corpus statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub document_count: u64,
    pub document_frequency: BTreeMap<Term, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Document frequency {frequency} for term {term:?} is outside 1..={document_count}")]
    FrequencyOutOfRange {
        term: String,
        frequency: u64,
        document_count: u64,
    },
}
