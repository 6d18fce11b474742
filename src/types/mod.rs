pub mod identifiers;
pub mod scoring;

pub use identifiers::{DocumentId, Fingerprint, Term};
pub use scoring::{ScoreDetails, ScoringError, TermWeight};
