pub mod stats;

pub use stats::{CorpusSnapshot, CorpusStats, SnapshotError};
