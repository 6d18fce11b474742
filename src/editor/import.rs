use std::path::Path;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::fingerprint::FingerprintError;
use crate::store::StoreError;
use crate::types::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No file handle was given")]
    MissingHandle,
    #[error("File name must not be empty")]
    EmptyName,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Fingerprint error: {0}")]
    Fingerprint(#[from] FingerprintError),
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

/// Read a file's bytes as UTF-8 text after the boundary checks.
pub(crate) fn read_text(handle: Option<&Path>, name: &str) -> Result<String, ImportError> {
    let path = handle.ok_or(ImportError::MissingHandle)?;
    if name.is_empty() {
        return Err(ImportError::EmptyName);
    }

    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
