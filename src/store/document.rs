use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentId, Fingerprint};

/// A document held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub name: String,
    pub content: String,
    /// Fingerprint taken when the document was imported. Never changes.
    pub original_fingerprint: Fingerprint,
    pub current_fingerprint: Fingerprint,
    pub imported_at: DateTime<Utc>, // informational only
}

impl StoredDocument {
    /// True once the content no longer matches what was imported.
    pub fn is_modified(&self) -> bool {
        self.original_fingerprint != self.current_fingerprint
    }
}

/// Input for a store insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub content: String,
    pub fingerprint: Fingerprint,
}
