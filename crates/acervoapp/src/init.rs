//! # Data Root Discovery
//!
//! The gallery reads a local export of the hosted collection. The export lives
//! in a `.acervo/` directory, and everything the CLI needs sits inside it:
//!
//! ```text
//! museum-export/
//! └── .acervo/
//!     ├── acervo.toml          # optional configuration
//!     └── artifacts/...        # the document tree (see `store`)
//! ```
//!
//! ## Resolution Order
//!
//! [`initialize`] picks the data root as follows:
//!
//! 1. `data_override` (the CLI's `--data`): used as is when it ends in
//!    `.acervo`, otherwise `.acervo` is appended.
//! 2. The `ACERVO_DATA` environment variable, with the same rule.
//! 3. [`find_data_root`]: walk up from the working directory to the nearest
//!    directory holding `.acervo/`.
//! 4. `cwd/.acervo`, which may not exist yet. Reading a missing export yields
//!    an empty collection, not an error.
//!
//! The walk stops at the home directory or the filesystem root, so an export
//! in `$HOME` only applies when running from `$HOME` itself or below it through
//! an explicit path.
//!
//! ## Configuration
//!
//! `acervo.toml` is read from the user's config directory first and then from
//! the data root, later files overriding earlier ones (see [`crate::config`]).

use crate::api::GalleryApi;
use crate::config::AcervoConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DocumentPaths;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = ".acervo";
pub const CONFIG_FILE_NAME: &str = "acervo.toml";
pub const DATA_ENV_VAR: &str = "ACERVO_DATA";

pub struct AcervoContext {
    pub api: GalleryApi<FileStore>,
    pub config: AcervoConfig,
    pub data_root: PathBuf,
}

/// Walk up from `cwd` to the nearest directory containing `.acervo/`.
/// Returns None if none is found before reaching home or root.
pub fn find_data_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// The user-level config directory, if the OS provides one.
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "nugep", "acervo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Config search paths, lowest priority first.
pub fn config_search_paths(data_root: &Path) -> Vec<SearchPath> {
    let mut paths = Vec::new();
    if let Some(dir) = user_config_dir() {
        paths.push(SearchPath::Path(dir));
    }
    paths.push(SearchPath::Path(data_root.to_path_buf()));
    paths
}

pub fn load_config(data_root: &Path) -> AcervoConfig {
    Clapfig::builder()
        .app_name("acervo")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(config_search_paths(data_root))
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

fn resolve_data_root(cwd: &Path, data_override: Option<PathBuf>) -> PathBuf {
    let explicit = data_override.or_else(|| {
        std::env::var_os(DATA_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    });

    match explicit {
        Some(path) if path.file_name().is_some_and(|name| name == DATA_DIR_NAME) => path,
        Some(path) => path.join(DATA_DIR_NAME),
        None => find_data_root(cwd).unwrap_or_else(|| cwd.join(DATA_DIR_NAME)),
    }
}

/// Resolve the data root, load configuration, and build the API.
///
/// Fails only when the configured tenant cannot be used as a path segment.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<AcervoContext> {
    let data_root = resolve_data_root(cwd, data_override);
    let config = load_config(&data_root);
    let paths = DocumentPaths::new(&config.tenant)?;

    tracing::debug!(
        data_root = %data_root.display(),
        tenant = paths.tenant(),
        "initialized"
    );

    let store = FileStore::new_fs(data_root.clone(), paths);
    let api = GalleryApi::new(store).with_default_sort(config.sort_key());

    Ok(AcervoContext {
        api,
        config,
        data_root,
    })
}
