//! # Acervo Architecture
//!
//! Acervo is the **public gallery of a museum collection**: it takes the catalogue
//! a museum keeps in a document store and turns it into what a visitor may see.
//! Visitors search, narrow by type, location, year and status, pick an ordering
//! and open one artifact in detail. Staff decide which sensitive fields
//! (location, provenance, registration number, condition) are disclosed.
//!
//! This is a library that happens to have a CLI client, not the other way round.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/acervo)                                  │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads snapshots, holds the visitor's filter (Session)    │
//! │  - Normalizes inputs (blank selections, item selectors)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Gallery predicate, ordering, facets, detail lookup       │
//! │  - Pure functions of (items, settings, filter)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over a raw StorageBackend       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Redaction Happens Once
//!
//! Every read of an item on the public side goes through
//! [`visibility::PublicItem`], which answers "absent" for fields the settings
//! hide. Search, categorical filters, facets and the detail view all read
//! through it, so a hidden field cannot be matched, enumerated or displayed.
//! Archived items are removed before any of that, by the gallery predicate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and [`api::Session`]
//! - [`commands`]: Load, browse, facets and detail logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `VisibilitySettings`, `Snapshot`
//! - [`attributes`]: Uniform field access and field filters
//! - [`visibility`]: The redacting projection of an item
//! - [`index`]: 1-based display indexes and item selectors
//! - [`text`]: Accent folding for ordering
//! - [`config`] and [`init`]: Configuration and data root discovery
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
pub mod text;
pub mod visibility;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
