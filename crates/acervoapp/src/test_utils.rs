use crate::store::fs::FileStore;
use crate::store::DocumentPaths;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_TENANT: &str = "nugep-oficial";

/// A throwaway data root with a `FileStore` pointed at it.
pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join(".acervo");
        fs::create_dir_all(&root).expect("failed to create data root");
        let paths = DocumentPaths::new(TEST_TENANT).expect("valid tenant");
        let store = FileStore::new_fs(root.clone(), paths);
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    pub fn write_item(&self, id: &str, body: Value) {
        let dir = self.root.join(self.store.paths().collection_items());
        write_json(&dir.join(format!("{}.json", id)), &body);
    }

    pub fn write_visibility(&self, body: Value) {
        let file = self
            .root
            .join(format!("{}.json", self.store.paths().visibility_settings()));
        write_json(&file, &body);
    }

    /// Write every item of [`sample_collection`].
    pub fn with_sample_collection(self) -> Self {
        for (id, body) in sample_collection() {
            self.write_item(id, body);
        }
        self
    }
}

fn write_json(file: &Path, body: &Value) {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).expect("failed to create document dir");
    }
    let text = serde_json::to_string_pretty(body).expect("serializable document");
    fs::write(file, text).expect("failed to write document");
}

/// A small, messy collection: one archived item, one undated, one with a
/// string year and one with a numeric registration number.
pub fn sample_collection() -> Vec<(&'static str, Value)> {
    vec![
        (
            "art-001",
            json!({
                "title": "Vaso Marajoara",
                "artist": "Desconhecido",
                "year": 1950,
                "type": "Cerâmica",
                "location": "Sala 1",
                "status": "Exposto",
                "regNumber": "NUGEP-0001",
                "provenance": "Doação",
                "condition": "Bom",
                "customFields": [{"label": "Técnica", "value": "Modelagem"}]
            }),
        ),
        (
            "art-002",
            json!({
                "title": "Escultura em Madeira",
                "artist": "Ana Souza",
                "year": "1890",
                "type": "Escultura",
                "location": "Reserva Técnica",
                "status": "Reserva",
                "regNumber": 2002
            }),
        ),
        (
            "art-003",
            json!({
                "title": "Tapete Antigo",
                "year": 2001,
                "type": "Têxtil",
                "location": "Depósito",
                "status": "Arquivado",
                "regNumber": "NUGEP-0003"
            }),
        ),
        (
            "art-004",
            json!({
                "title": "Álbum de Fotografias",
                "type": "Fotografia",
                "location": "Sala 2",
                "status": "Exposto"
            }),
        ),
    ]
}
