//! In-memory store and registrar for tests and server rendering.

use std::cell::RefCell;
use std::collections::BTreeMap;

use records::{StoreName, SyncTag};

use super::{RecordStore, StoreError, SyncRegistrar};

#[derive(Debug, Default)]
pub struct MemoryStore {
    stores: RefCell<BTreeMap<StoreName, BTreeMap<String, serde_json::Value>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in one store.
    #[must_use]
    pub fn len(&self, store: StoreName) -> usize {
        self.stores.borrow().get(&store).map_or(0, BTreeMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.borrow().values().all(BTreeMap::is_empty)
    }
}

impl RecordStore for MemoryStore {
    async fn put(&self, store: StoreName, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        self.stores
            .borrow_mut()
            .entry(store)
            .or_default()
            .insert(key.to_owned(), value.clone());
        Ok(())
    }

    async fn get(&self, store: StoreName, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.stores.borrow().get(&store).and_then(|s| s.get(key)).cloned())
    }

    async fn delete(&self, store: StoreName, key: &str) -> Result<(), StoreError> {
        if let Some(s) = self.stores.borrow_mut().get_mut(&store) {
            s.remove(key);
        }
        Ok(())
    }

    async fn all(&self, store: StoreName) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(self
            .stores
            .borrow()
            .get(&store)
            .map(|s| s.values().cloned().collect())
            .unwrap_or_default())
    }
}

/// Records registered tags; optionally fails every registration.
#[derive(Debug, Default)]
pub struct RecordingSync {
    tags: RefCell<Vec<SyncTag>>,
    unsupported: bool,
}

impl RecordingSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registrar that behaves like a browser without Background Sync.
    #[must_use]
    pub fn unsupported() -> Self {
        Self { tags: RefCell::new(Vec::new()), unsupported: true }
    }

    #[must_use]
    pub fn tags(&self) -> Vec<SyncTag> {
        self.tags.borrow().clone()
    }
}

impl SyncRegistrar for RecordingSync {
    async fn replays_in_background(&self) -> bool {
        !self.unsupported
    }

    async fn register(&self, tag: SyncTag) -> Result<(), StoreError> {
        if self.unsupported {
            return Err(StoreError::Unsupported("background sync"));
        }
        self.tags.borrow_mut().push(tag);
        Ok(())
    }
}
