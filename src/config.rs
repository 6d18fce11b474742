use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fingerprint::FingerprintAlgorithm;
use crate::text::TokenizerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tokenizer: TokenizerConfig,
    pub fingerprint: FingerprintAlgorithm,
}

impl EditorConfig {
    pub fn v0() -> Self {
        Self {
            tokenizer: TokenizerConfig::v0(),
            fingerprint: FingerprintAlgorithm::Md5,
        }
    }

    /// Parse a JSON config. Missing fields take their `v0` values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(f)?)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::v0()
    }
}
