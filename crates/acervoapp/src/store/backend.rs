use crate::error::Result;
use serde_json::Value;

/// A document as returned by the store: its id and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub body: Value,
}

/// Abstract interface for raw document reads.
///
/// This trait handles the "how" of reading (filesystem vs memory), while
/// `CollectionStore` handles the "what" (items, settings, defaults).
/// Paths are `/`-separated logical paths such as
/// `artifacts/{tenant}/public/data/collection_items`.
pub trait StorageBackend {
    /// Every document directly under a collection path, ordered by id.
    /// A collection that does not exist is empty, not an error.
    fn read_collection(&self, path: &str) -> Result<Vec<RawDocument>>;

    /// One document. Returns Ok(None) when it does not exist; Err only on
    /// actual read failures (permissions, unparsable content).
    fn read_document(&self, path: &str) -> Result<Option<Value>>;
}
