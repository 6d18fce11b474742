//! Content fingerprints used to detect edits made outside the editor.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::types::identifiers::Fingerprint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    #[error("Invalid argument: text to fingerprint must be present")]
    InvalidArgument,
}

pub trait Fingerprinter: Send + Sync {
    /// Digest of `text`. Same input, same digest; absent input is an error.
    fn fingerprint(&self, text: Option<&str>) -> Result<Fingerprint, FingerprintError>;
}

/// MD5 digest as 32 upper-case hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Fingerprinter;

impl Fingerprinter for Md5Fingerprinter {
    fn fingerprint(&self, text: Option<&str>) -> Result<Fingerprint, FingerprintError> {
        let text = text.ok_or(FingerprintError::InvalidArgument)?;
        let digest = md5::compute(text.as_bytes());
        Ok(Fingerprint::from_digest(hex::encode_upper(digest.0)))
    }
}

/// SHA-256 digest formatted as `sha256:<hex>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Fingerprinter;

impl Fingerprinter for Sha256Fingerprinter {
    fn fingerprint(&self, text: Option<&str>) -> Result<Fingerprint, FingerprintError> {
        let text = text.ok_or(FingerprintError::InvalidArgument)?;
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Ok(Fingerprint::from_digest(format!("sha256:{hex}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl FingerprintAlgorithm {
    pub fn fingerprinter(self) -> Box<dyn Fingerprinter> {
        match self {
            FingerprintAlgorithm::Md5 => Box::new(Md5Fingerprinter),
            FingerprintAlgorithm::Sha256 => Box::new(Sha256Fingerprinter),
        }
    }

    /// Length of every digest this algorithm produces.
    pub fn digest_len(self) -> usize {
        match self {
            FingerprintAlgorithm::Md5 => 32,
            FingerprintAlgorithm::Sha256 => "sha256:".len() + 64,
        }
    }
}
