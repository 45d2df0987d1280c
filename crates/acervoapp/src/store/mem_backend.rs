use super::backend::{RawDocument, StorageBackend};
use crate::error::{AcervoError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the gallery is single-threaded.
/// Documents are keyed by full path (`collection/id`), so a `BTreeMap` already
/// keeps each collection ordered by id.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<BTreeMap<String, Value>>,
    simulate_read_error: RefCell<bool>,
    simulate_settings_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` at `path`, replacing any previous document.
    pub fn put_document(&self, path: &str, body: Value) {
        self.documents
            .borrow_mut()
            .insert(path.trim_matches('/').to_string(), body);
    }

    pub fn remove_document(&self, path: &str) {
        self.documents.borrow_mut().remove(path.trim_matches('/'));
    }

    /// Make collection reads fail, as a network or permission error would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Make single-document reads fail.
    pub fn set_simulate_settings_error(&self, simulate: bool) {
        *self.simulate_settings_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read_collection(&self, path: &str) -> Result<Vec<RawDocument>> {
        if *self.simulate_read_error.borrow() {
            return Err(AcervoError::Store("Simulated read error".to_string()));
        }
        let prefix = format!("{}/", path.trim_matches('/'));
        let documents = self.documents.borrow();
        Ok(documents
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .filter_map(|(key, body)| {
                let id = &key[prefix.len()..];
                // Only direct children belong to the collection.
                (!id.contains('/')).then(|| RawDocument {
                    id: id.to_string(),
                    body: body.clone(),
                })
            })
            .collect())
    }

    fn read_document(&self, path: &str) -> Result<Option<Value>> {
        if *self.simulate_settings_error.borrow() {
            return Err(AcervoError::Store("Simulated read error".to_string()));
        }
        Ok(self.documents.borrow().get(path.trim_matches('/')).cloned())
    }
}
