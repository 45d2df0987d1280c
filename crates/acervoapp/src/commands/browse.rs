//! # Browsing: the Gallery Predicate and Ordering
//!
//! [`select`] is a pure function of `(items, settings, filter)`. Every item is
//! tested against three clauses, all of which must hold:
//!
//! 1. **Archive exclusion**: `status == "Arquivado"` is never shown. This is
//!    not a filter the user can turn off.
//! 2. **Text match**: the lowercased search term is a substring of `title`,
//!    `artist`, or `regNumber`. `regNumber` only counts when it is disclosed.
//!    An empty term matches everything; an absent field matches nothing.
//! 3. **Categorical equality**: each of `type`, `location`, `year`, `status`
//!    that is selected must equal the item's value exactly.
//!
//! Clauses 2 and 3 read fields through [`PublicItem`], so a hidden field is
//! absent to them. Selecting a location while locations are hidden yields
//! nothing rather than leaking which items sit where.
//!
//! A selection that matches no item (say, a type from before a reload) is not
//! an error. It just produces an empty listing.
//!
//! ## Ordering
//!
//! | Key | Order | Missing value |
//! |-----|-------|---------------|
//! | `alphabetical` | title, accent- and case-insensitive | empty title, sorts first |
//! | `year-desc` | year, newest first | year 0, sorts last |
//! | `year-asc` | year, oldest first | year 0, sorts first |
//!
//! All three sorts are stable: ties keep their input order.

use crate::attributes::{AttrFilter, Field};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AcervoError, Result};
use crate::index::index_items;
use crate::model::{Item, Snapshot, VisibilitySettings};
use crate::text::collation_key;
use crate::visibility::PublicItem;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Alphabetical,
    YearDesc,
    YearAsc,
}

impl SortKey {
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Alphabetical => "alphabetical",
            SortKey::YearDesc => "year-desc",
            SortKey::YearAsc => "year-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = AcervoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alphabetical" | "alpha" | "az" | "title" => Ok(SortKey::Alphabetical),
            "year-desc" | "newest" | "recent" => Ok(SortKey::YearDesc),
            "year-asc" | "oldest" => Ok(SortKey::YearAsc),
            other => Err(AcervoError::Api(format!(
                "Unknown sort key: {} (expected alphabetical, year-desc or year-asc)",
                other
            ))),
        }
    }
}

/// The user's current browsing choices.
///
/// `None` (and, through the setters, an empty string) means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryFilter {
    pub search_term: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub year: Option<i64>,
    pub status: Option<String>,
    pub sort: SortKey,
}

impl GalleryFilter {
    /// An unconstrained filter with the given ordering.
    pub fn with_sort(sort: SortKey) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// True when any clause beyond archive exclusion is in force.
    pub fn is_constrained(&self) -> bool {
        !self.search_term.is_empty()
            || selection(&self.kind).is_some()
            || selection(&self.location).is_some()
            || self.year.is_some()
            || selection(&self.status).is_some()
    }
}

/// Treat blank selections as unset.
pub fn normalize_selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// The compiled form of a [`GalleryFilter`], built once per evaluation.
struct Predicate {
    search: Vec<AttrFilter>,
    categorical: Vec<AttrFilter>,
}

impl Predicate {
    fn new(filter: &GalleryFilter) -> Self {
        let search = if filter.search_term.is_empty() {
            Vec::new()
        } else {
            [Field::Title, Field::Artist, Field::RegNumber]
                .into_iter()
                .map(|field| AttrFilter::contains_text(field, &filter.search_term))
                .collect()
        };

        let mut categorical = Vec::new();
        if let Some(kind) = selection(&filter.kind) {
            categorical.push(AttrFilter::eq(Field::Type, kind));
        }
        if let Some(location) = selection(&filter.location) {
            categorical.push(AttrFilter::eq(Field::Location, location));
        }
        if let Some(year) = filter.year {
            categorical.push(AttrFilter::eq(Field::Year, year));
        }
        if let Some(status) = selection(&filter.status) {
            categorical.push(AttrFilter::eq(Field::Status, status));
        }

        Self {
            search,
            categorical,
        }
    }

    fn matches(&self, item: &Item, settings: &VisibilitySettings) -> bool {
        if !is_public(item) {
            return false;
        }
        let public = PublicItem::new(item, settings);
        let text_match = self.search.is_empty() || self.search.iter().any(|c| c.matches(&public));
        text_match && self.categorical.iter().all(|c| c.matches(&public))
    }
}

/// Archived items are never part of the public view.
pub fn is_public(item: &Item) -> bool {
    !item.is_archived()
}

/// Whether `item` survives the gallery predicate.
pub fn matches(item: &Item, settings: &VisibilitySettings, filter: &GalleryFilter) -> bool {
    Predicate::new(filter).matches(item, settings)
}

/// Filter `items` and order the survivors by `filter.sort`.
pub fn select<'a>(
    items: &'a [Item],
    settings: &VisibilitySettings,
    filter: &GalleryFilter,
) -> Vec<&'a Item> {
    let predicate = Predicate::new(filter);
    let mut selected: Vec<&Item> = items
        .iter()
        .filter(|item| predicate.matches(item, settings))
        .collect();
    sort_items(&mut selected, filter.sort);
    selected
}

/// Stable sort by `key`.
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    match key {
        SortKey::Alphabetical => {
            items.sort_by_cached_key(|item| collation_key(item.title.as_deref().unwrap_or("")))
        }
        SortKey::YearDesc => items.sort_by_key(|item| Reverse(item.year.unwrap_or(0))),
        SortKey::YearAsc => items.sort_by_key(|item| item.year.unwrap_or(0)),
    }
}

/// Message shown when a listing comes back empty.
pub fn empty_message(filter: &GalleryFilter) -> String {
    if filter.search_term.is_empty() {
        "Nenhuma obra encontrada.".to_string()
    } else {
        format!("Nenhuma obra encontrada para \"{}\".", filter.search_term)
    }
}

pub fn run(snapshot: &Snapshot, filter: &GalleryFilter) -> CmdResult {
    let selected = select(&snapshot.items, &snapshot.settings, filter);
    tracing::debug!(
        total = snapshot.items.len(),
        matched = selected.len(),
        sort = %filter.sort,
        "browse evaluated"
    );

    let redacted = selected
        .into_iter()
        .map(|item| PublicItem::new(item, &snapshot.settings).redact())
        .collect();
    let mut result = CmdResult::default()
        .with_listed_items(index_items(redacted))
        .with_loaded_at(snapshot.loaded_at);
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info(empty_message(filter)));
    }
    result
}
