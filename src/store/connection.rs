use std::fmt;
use std::sync::Arc;

use crate::store::memory::InMemoryStore;
use crate::store::DocumentStore;

/// Shared handle to the backing store.
///
/// Constructed once by the host and passed to whatever needs persistence.
/// Clones share the same store; `handle` returns that one store every time.
#[derive(Clone)]
pub struct StoreConnection {
    store: Arc<dyn DocumentStore>,
}

impl StoreConnection {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    pub fn handle(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.store)
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn same_store(&self, other: &StoreConnection) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConnection")
            .field("handles", &Arc::strong_count(&self.store))
            .finish()
    }
}
