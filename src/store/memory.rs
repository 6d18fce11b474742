use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::store::document::{NewDocument, StoredDocument};
use crate::store::{DocumentStore, StoreError};
use crate::types::identifiers::{DocumentId, Fingerprint};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    documents: BTreeMap<DocumentId, StoredDocument>,
}

/// Process-local store. Ids are assigned sequentially starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for InMemoryStore {
    fn insert(&self, document: NewDocument) -> Result<DocumentId, StoreError> {
        let mut inner = self.inner.write();
        if inner.documents.values().any(|d| d.name == document.name) {
            return Err(StoreError::DuplicateName(document.name));
        }

        inner.next_id += 1;
        let id = DocumentId::new(inner.next_id);
        inner.documents.insert(
            id,
            StoredDocument {
                id,
                name: document.name,
                content: document.content,
                original_fingerprint: document.fingerprint.clone(),
                current_fingerprint: document.fingerprint,
                imported_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn get(&self, id: DocumentId) -> Result<Option<StoredDocument>, StoreError> {
        Ok(self.inner.read().documents.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<StoredDocument>, StoreError> {
        Ok(self
            .inner
            .read()
            .documents
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    fn update_content(
        &self,
        id: DocumentId,
        content: String,
        fingerprint: Fingerprint,
    ) -> Result<StoredDocument, StoreError> {
        let mut inner = self.inner.write();
        let document = inner.documents.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        document.content = content;
        document.current_fingerprint = fingerprint;
        Ok(document.clone())
    }

    fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        Ok(self.inner.read().documents.values().cloned().collect())
    }
}
