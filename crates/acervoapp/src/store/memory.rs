use super::mem_backend::MemBackend;
use super::{CollectionStore, DocumentPaths};
use serde_json::Value;

/// In-memory store: `CollectionStore` over `MemBackend`.
pub type InMemoryStore = CollectionStore<MemBackend>;

pub const TEST_TENANT: &str = "test-tenant";

impl InMemoryStore {
    pub fn new() -> Self {
        let paths = DocumentPaths {
            tenant: TEST_TENANT.to_string(),
        };
        CollectionStore::with_backend(MemBackend::new(), paths)
    }

    /// Add (or replace) the item document `id`.
    pub fn put_item(&self, id: &str, body: Value) {
        let path = format!("{}/{}", self.paths().collection_items(), id);
        self.backend().put_document(&path, body);
    }

    pub fn put_visibility(&self, body: Value) {
        self.backend()
            .put_document(&self.paths().visibility_settings(), body);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
