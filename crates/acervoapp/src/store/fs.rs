use super::fs_backend::FsBackend;
use super::{CollectionStore, DocumentPaths};
use std::path::PathBuf;

/// File-based store: `CollectionStore` over `FsBackend`.
pub type FileStore = CollectionStore<FsBackend>;

impl FileStore {
    pub fn new_fs(root: PathBuf, paths: DocumentPaths) -> Self {
        CollectionStore::with_backend(FsBackend::new(root), paths)
    }
}
