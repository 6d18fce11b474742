//! Text editor core.
//!
//! `editor-core` provides a TF-IDF relevance calculator over a growable
//! corpus, content fingerprints for detecting out-of-band edits, and an
//! editor layer that imports documents, tracks their integrity and delegates
//! transliteration to a pluggable provider. Scoring is deterministic:
//! identical corpus state and input always produce the identical score,
//! bit-for-bit.

pub mod config;
pub mod corpus;
pub mod editor;
pub mod fingerprint;
pub mod scoring;
pub mod store;
pub mod text;
pub mod transliterate;
pub mod types;

pub use config::EditorConfig;
pub use editor::Editor;
pub use scoring::TfIdfCalculator;
