//! # Storage Layer
//!
//! The collection lives in a hosted document database. The gallery never writes
//! to it and needs exactly two reads:
//!
//! 1. every document in the tenant's **collection items** collection, and
//! 2. the tenant's **visibility settings** document, which may not exist.
//!
//! ## Two Seams
//!
//! - [`backend::StorageBackend`] is raw I/O: "give me the JSON documents at
//!   this path". It knows nothing about items.
//! - [`DataStore`] is what the loader calls: typed items and settings.
//!   [`CollectionStore`] implements it over any backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: documents as JSON files on disk, for exports of the
//!   hosted database and for local use.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Document Layout
//!
//! Paths mirror the hosted database, with one directory per collection and one
//! file per document:
//!
//! ```text
//! <data root>/
//! └── artifacts/{tenant}/public/data/
//!     ├── collection_items/
//!     │   ├── {id}.json        # one Item per file
//!     │   └── ...
//!     └── settings/
//!         └── visibility.json  # VisibilitySettings (optional)
//! ```

use crate::error::{AcervoError, Result};
use crate::model::{Item, VisibilitySettings};
use backend::StorageBackend;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// The two fixed logical paths for one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    tenant: String,
}

impl DocumentPaths {
    /// The tenant must be usable as a single path segment.
    pub fn new(tenant: &str) -> Result<Self> {
        let tenant = tenant.trim();
        let invalid = tenant.is_empty()
            || tenant == "."
            || tenant == ".."
            || tenant.contains(['/', '\\']);
        if invalid {
            return Err(AcervoError::Store(format!("Invalid tenant id: {:?}", tenant)));
        }
        Ok(Self {
            tenant: tenant.to_string(),
        })
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn collection_items(&self) -> String {
        format!("artifacts/{}/public/data/collection_items", self.tenant)
    }

    pub fn visibility_settings(&self) -> String {
        format!("artifacts/{}/public/data/settings/visibility", self.tenant)
    }
}

/// Typed, read-only access to the collection.
pub trait DataStore {
    /// Every item in the collection, in store order.
    fn list_items(&self) -> Result<Vec<Item>>;

    /// The visibility settings, or `None` when the document does not exist.
    fn visibility_settings(&self) -> Result<Option<VisibilitySettings>>;
}

/// [`DataStore`] over a raw [`StorageBackend`].
pub struct CollectionStore<B: StorageBackend> {
    backend: B,
    paths: DocumentPaths,
}

impl<B: StorageBackend> CollectionStore<B> {
    pub fn with_backend(backend: B, paths: DocumentPaths) -> Self {
        Self { backend, paths }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn paths(&self) -> &DocumentPaths {
        &self.paths
    }
}

impl<B: StorageBackend> DataStore for CollectionStore<B> {
    fn list_items(&self) -> Result<Vec<Item>> {
        let path = self.paths.collection_items();
        let documents = self.backend.read_collection(&path)?;
        tracing::debug!(path = %path, documents = documents.len(), "read collection");
        Ok(documents
            .into_iter()
            .map(|doc| Item::from_document(doc.id, doc.body))
            .collect())
    }

    fn visibility_settings(&self) -> Result<Option<VisibilitySettings>> {
        let path = self.paths.visibility_settings();
        let body = self.backend.read_document(&path)?;
        Ok(body.as_ref().map(VisibilitySettings::from_document))
    }
}
