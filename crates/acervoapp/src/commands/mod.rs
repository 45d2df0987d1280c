//! # Command Layer
//!
//! This module contains the gallery's business logic. Each operation lives in
//! its own submodule as plain functions over domain types:
//!
//! - [`load`]: read items and visibility settings into a [`Snapshot`](crate::model::Snapshot)
//! - [`browse`]: evaluate the gallery predicate and order the survivors
//! - [`facets`]: derive the filter options offered to the user
//! - [`detail`]: resolve one item for the detail view
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, no formatting, no exit codes
//! - **Argument parsing**: that's the CLI layer's job
//! - **Mutation**: snapshots and items are read-only here
//!
//! Every command except `load` is a pure, synchronous function of its inputs.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The UI layer decides how to
//! render listed items, facets, the detail record and messages.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` or hand-built snapshots and check the
//! returned data, never rendered output.

use crate::commands::facets::FacetOptions;
use chrono::{DateTime, Utc};
use crate::index::DisplayItem;
use crate::visibility::RedactedItem;
use serde::Serialize;

pub mod browse;
pub mod detail;
pub mod facets;
pub mod load;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_items: Vec<DisplayItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<FacetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<RedactedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
    /// When the snapshot behind this result was read from the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_facets(mut self, facets: FacetOptions) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_detail(mut self, item: RedactedItem) -> Self {
        self.detail = Some(item);
        self
    }

    pub fn with_loaded_at(mut self, loaded_at: DateTime<Utc>) -> Self {
        self.loaded_at = Some(loaded_at);
        self
    }
}
