//! # Configuration
//!
//! Acervo configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ACERVO__TENANT`, `ACERVO__DEFAULT_SORT`.
//! 2. **Data Root Config**: `.acervo/acervo.toml`, next to the exported collection.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `tenant` | `nugep-oficial` | Which museum's collection to read |
//! | `default_sort` | `alphabetical` | Ordering a fresh session starts with (`alphabetical`, `year-desc`, `year-asc`) |
//!
//! ## CLI Usage
//!
//! - `acervo config`: show all resolved values.
//! - `acervo config <key>`: show one value.

use crate::commands::browse::SortKey;
use confique::Config;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TENANT: &str = "nugep-oficial";

/// Configuration for acervo, stored in `acervo.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AcervoConfig {
    /// Tenant (museum) whose collection is read.
    #[config(default = "nugep-oficial")]
    pub tenant: String,

    /// Sort order a new session starts with.
    #[config(default = "alphabetical")]
    pub default_sort: String,
}

impl Default for AcervoConfig {
    fn default() -> Self {
        Self {
            tenant: DEFAULT_TENANT.to_string(),
            default_sort: SortKey::Alphabetical.name().to_string(),
        }
    }
}

impl AcervoConfig {
    /// The configured sort, or alphabetical when the value is not a known key.
    pub fn sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %self.default_sort, "unknown default_sort; using alphabetical");
            SortKey::Alphabetical
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcervoConfig::default();
        assert_eq!(config.tenant, "nugep-oficial");
        assert_eq!(config.sort_key(), SortKey::Alphabetical);
    }

    #[test]
    fn test_sort_key_parses_names_and_aliases() {
        let config = AcervoConfig {
            default_sort: "year-desc".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::YearDesc);

        let config = AcervoConfig {
            default_sort: "oldest".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::YearAsc);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let config = AcervoConfig {
            default_sort: "random".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::Alphabetical);
    }

    #[test]
    fn test_toml_round_trip_keeps_keys() {
        let config: AcervoConfig =
            toml::from_str("tenant = \"museu-x\"\ndefault_sort = \"year-asc\"\n").unwrap();
        assert_eq!(config.tenant, "museu-x");
        assert_eq!(config.sort_key(), SortKey::YearAsc);

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("tenant = \"museu-x\""));
    }
}
