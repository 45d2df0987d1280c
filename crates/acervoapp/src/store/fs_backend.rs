use super::backend::{RawDocument, StorageBackend};
use crate::error::{AcervoError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DOC_EXT: &str = "json";

/// Documents as JSON files under a root directory.
///
/// A collection is a directory; each `{id}.json` inside it is a document.
/// Other files and subdirectories are ignored.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(AcervoError::Store(format!("Invalid document path: {}", path)));
            }
            resolved.push(segment);
        }
        Ok(resolved)
    }

    fn parse_file(&self, file: &Path) -> Result<Value> {
        let content = fs::read_to_string(file).map_err(AcervoError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            AcervoError::Store(format!("Malformed document {}: {}", file.display(), e))
        })
    }
}

impl StorageBackend for FsBackend {
    fn read_collection(&self, path: &str) -> Result<Vec<RawDocument>> {
        let dir = self.resolve(path)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AcervoError::Io(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let file = entry.map_err(AcervoError::Io)?.path();
            if !file.is_file() || file.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
                continue;
            }
            let Some(id) = file.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            files.push((id, file));
        }
        files.sort_by(|(a, _), (b, _)| a.cmp(b));

        files
            .into_iter()
            .map(|(id, file)| {
                let body = self.parse_file(&file)?;
                Ok(RawDocument { id, body })
            })
            .collect()
    }

    fn read_document(&self, path: &str) -> Result<Option<Value>> {
        let mut file = self.resolve(path)?;
        file.set_extension(DOC_EXT);
        if !file.exists() {
            return Ok(None);
        }
        self.parse_file(&file).map(Some)
    }
}
