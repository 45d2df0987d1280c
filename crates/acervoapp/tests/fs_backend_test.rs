use acervoapp::error::AcervoError;
use acervoapp::store::backend::StorageBackend;
use acervoapp::store::fs::FileStore;
use acervoapp::store::fs_backend::FsBackend;
use acervoapp::store::{DataStore, DocumentPaths};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn write(root: &Path, relative: &str, content: &str) {
    let file = root.join(relative);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

#[test]
fn test_missing_collection_reads_as_empty() {
    let (_dir, backend) = setup();
    let docs = backend.read_collection("artifacts/x/public/data/collection_items").unwrap();
    assert!(docs.is_empty());
}

#[test]
fn test_collection_documents_sorted_by_id() {
    let (dir, backend) = setup();
    write(dir.path(), "c/b.json", r#"{"title": "B"}"#);
    write(dir.path(), "c/a.json", r#"{"title": "A"}"#);

    let docs = backend.read_collection("c").unwrap();
    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(docs[0].body, json!({"title": "A"}));
}

#[test]
fn test_non_json_files_and_subdirectories_are_ignored() {
    let (dir, backend) = setup();
    write(dir.path(), "c/a.json", "{}");
    write(dir.path(), "c/notes.txt", "not a document");
    write(dir.path(), "c/nested/b.json", "{}");

    let docs = backend.read_collection("c").unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "a");
}

#[test]
fn test_malformed_document_is_an_error() {
    let (dir, backend) = setup();
    write(dir.path(), "c/a.json", "{ nope");

    let err = backend.read_collection("c").unwrap_err();
    assert!(matches!(err, AcervoError::Store(_)));
}

#[test]
fn test_read_document() {
    let (dir, backend) = setup();
    assert_eq!(backend.read_document("s/visibility").unwrap(), None);

    write(dir.path(), "s/visibility.json", r#"{"showLocation": true}"#);
    assert_eq!(
        backend.read_document("s/visibility").unwrap(),
        Some(json!({"showLocation": true}))
    );
}

#[test]
fn test_parent_segments_are_rejected() {
    let (_dir, backend) = setup();
    assert!(backend.read_collection("../outside").is_err());
    assert!(backend.read_document("a/../../b").is_err());
}

#[test]
fn test_file_store_maps_documents() {
    let dir = TempDir::new().unwrap();
    let paths = DocumentPaths::new("museu").unwrap();
    write(
        dir.path(),
        "artifacts/museu/public/data/collection_items/x1.json",
        r#"{"id": "forged", "title": "Vaso", "year": "1950", "regNumber": 17}"#,
    );
    write(
        dir.path(),
        "artifacts/museu/public/data/settings/visibility.json",
        r#"{"showLocation": true, "showRegNumber": "true"}"#,
    );

    let store = FileStore::new_fs(dir.path().to_path_buf(), paths);
    let items = store.list_items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "x1");
    assert_eq!(items[0].year, Some(1950));
    assert_eq!(items[0].reg_number.as_deref(), Some("17"));

    let settings = store.visibility_settings().unwrap().unwrap();
    assert!(settings.show_location);
    assert!(!settings.show_reg_number);
}

#[test]
fn test_file_store_without_settings() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new_fs(
        dir.path().to_path_buf(),
        DocumentPaths::new("museu").unwrap(),
    );
    assert_eq!(store.visibility_settings().unwrap(), None);
}
