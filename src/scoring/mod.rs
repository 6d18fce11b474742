pub mod ranking;

use parking_lot::RwLock;
use tracing::debug;

use crate::corpus::{CorpusSnapshot, CorpusStats, SnapshotError};
use crate::text::{Tokenizer, TokenizerConfig};
use crate::types::identifiers::Term;
use crate::types::scoring::{ScoreDetails, ScoringError};
pub use ranking::{Scorer, TfIdfScorer};

/// TF-IDF relevance calculator over a growable corpus.
///
/// The corpus is owned by this instance and guarded by a read/write lock:
/// `add_document` is the only writer, every other operation is a reader, so
/// the document count and frequencies are always read as one consistent state.
#[derive(Debug)]
pub struct TfIdfCalculator<S = TfIdfScorer> {
    tokenizer: Tokenizer,
    scorer: S,
    corpus: RwLock<CorpusStats>,
}

impl Default for TfIdfCalculator<TfIdfScorer> {
    fn default() -> Self {
        Self::new(&TokenizerConfig::v0())
    }
}

impl TfIdfCalculator<TfIdfScorer> {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self::with_scorer(config, TfIdfScorer)
    }

    /// Rebuild a calculator from previously captured corpus statistics.
    pub fn from_snapshot(config: &TokenizerConfig, snapshot: CorpusSnapshot) -> Result<Self, SnapshotError> {
        let stats = CorpusStats::from_snapshot(snapshot)?;
        Ok(Self {
            tokenizer: Tokenizer::new(config),
            scorer: TfIdfScorer,
            corpus: RwLock::new(stats),
        })
    }
}

impl<S> TfIdfCalculator<S>
where
    S: Scorer,
{
    pub fn with_scorer(config: &TokenizerConfig, scorer: S) -> Self {
        Self {
            tokenizer: Tokenizer::new(config),
            scorer,
            corpus: RwLock::new(CorpusStats::new()),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Add one document to the corpus.
    ///
    /// An empty document still counts toward the document total.
    pub fn add_document<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<(), ScoringError> {
        let text = text
            .into()
            .ok_or(ScoringError::InvalidArgument("document text"))?;
        let counts = self.tokenizer.term_counts(text)?;

        let mut corpus = self.corpus.write();
        corpus.add(&counts);
        debug!(
            terms = counts.total(),
            distinct_terms = counts.distinct(),
            document_count = corpus.document_count(),
            "document added to corpus"
        );
        Ok(())
    }

    /// Aggregate TF-IDF score of `document` against the current corpus.
    pub fn score<'a>(&self, document: impl Into<Option<&'a str>>) -> Result<f64, ScoringError> {
        let details = self.explain(document)?;
        Ok(self.scorer.score_value(&details))
    }

    /// Score with the per-term breakdown.
    pub fn explain<'a>(&self, document: impl Into<Option<&'a str>>) -> Result<ScoreDetails, ScoringError> {
        let document = document
            .into()
            .ok_or(ScoringError::InvalidArgument("document"))?;
        let counts = self.tokenizer.term_counts(document)?;

        let corpus = self.corpus.read();
        Ok(self.scorer.score(&counts, &corpus))
    }

    pub fn document_count(&self) -> u64 {
        self.corpus.read().document_count()
    }

    pub fn document_frequency(&self, term: &Term) -> u64 {
        self.corpus.read().document_frequency(term)
    }

    pub fn inverse_document_frequency(&self, term: &Term) -> f64 {
        self.corpus.read().inverse_document_frequency(term)
    }

    pub fn snapshot(&self) -> CorpusSnapshot {
        self.corpus.read().snapshot()
    }
}
