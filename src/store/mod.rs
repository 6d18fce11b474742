pub mod connection;
pub mod document;
pub mod memory;

use thiserror::Error;

use crate::types::identifiers::{DocumentId, Fingerprint};
pub use connection::StoreConnection;
pub use document::{NewDocument, StoredDocument};
pub use memory::InMemoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(DocumentId),
    #[error("A document named {0:?} already exists")]
    DuplicateName(String),
}

/// Backing store for editor documents.
pub trait DocumentStore: Send + Sync {
    fn insert(&self, document: NewDocument) -> Result<DocumentId, StoreError>;

    fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, StoreError>;

    fn find_by_name(&self, name: &str) -> Result<Option<StoredDocument>, StoreError>;

    /// Replace the content; the original fingerprint is kept.
    fn update_content(
        &self,
        id: DocumentId,
        content: String,
        fingerprint: Fingerprint,
    ) -> Result<StoredDocument, StoreError>;

    /// All documents, ascending by id.
    fn list(&self) -> Result<Vec<StoredDocument>, StoreError>;
}
