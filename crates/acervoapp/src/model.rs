//! # Domain Model: Collection Items and Visibility Settings
//!
//! This module defines the records the gallery works on: [`Item`] (one catalogued
//! artifact), [`VisibilitySettings`] (the admin-controlled disclosure flags) and
//! [`Snapshot`] (one loaded, immutable view of both).
//!
//! ## Documents Are Untrusted
//!
//! Items come from a hosted document store that was filled in by hand over the
//! years. Fields go missing, years are typed as strings, catalog numbers are
//! typed as numbers. Rejecting such documents would hide real artifacts from the
//! public, so mapping is lenient and every field has exactly one rule:
//!
//! | Field | Accepted | Otherwise |
//! |-------|----------|-----------|
//! | text fields | string, number (rendered) | absent |
//! | `year` | integer, integral float, integer string | absent ("undated") |
//! | `status` | string | absent |
//! | `customFields` | array of `{label, value}` | empty |
//!
//! Unknown fields are kept verbatim in [`Item::extra`]. The document id always
//! comes from the store, never from the body.
//!
//! ## Fail-Closed Settings
//!
//! A visibility flag is on only when the settings document holds the JSON
//! boolean `true` for it. Missing documents, missing flags, `null`, `"true"` and
//! `1` all read as `false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::RangeInclusive;

pub const STATUS_ARCHIVED: &str = "Arquivado";
pub const STATUS_ON_DISPLAY: &str = "Exposto";

/// Curatorial status of an item.
///
/// Only two values carry behavior: archived items never reach the public view
/// and on-display items may get the exhibition badge. Every other status is kept
/// as written so it can still be filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Archived,
    OnDisplay,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Archived => STATUS_ARCHIVED,
            ItemStatus::OnDisplay => STATUS_ON_DISPLAY,
            ItemStatus::Other(s) => s,
        }
    }
}

impl From<&str> for ItemStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ARCHIVED => ItemStatus::Archived,
            STATUS_ON_DISPLAY => ItemStatus::OnDisplay,
            other => ItemStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ItemStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A free-form `{label, value}` attribute attached to an item (e.g. "Material").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub label: String,
    pub value: String,
}

/// One catalogued artifact.
///
/// Items are immutable once loaded; nothing in the crate takes `&mut Item`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Category label (medium/technique). Stored as `type` in documents.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Fields the gallery does not know about, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// An item with the given id and every field absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            artist: None,
            year: None,
            kind: None,
            location: None,
            status: None,
            reg_number: None,
            description: None,
            provenance: None,
            condition: None,
            image: None,
            custom_fields: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Map a store document onto an item. Never fails: a body that is not an
    /// object yields an item with every field absent.
    pub fn from_document(id: impl Into<String>, body: Value) -> Self {
        let id = id.into();
        match body {
            Value::Object(fields) => Self::from_fields(id, fields),
            other => {
                tracing::warn!(
                    item = %id,
                    kind = json_kind(&other),
                    "document body is not an object; loading it with no fields"
                );
                Self::new(id)
            }
        }
    }

    fn from_fields(id: String, mut doc: Map<String, Value>) -> Self {
        if doc.remove("id").is_some() {
            tracing::debug!(item = %id, "ignoring id stored inside document body");
        }

        let title = take_text(&mut doc, &id, "title");
        let artist = take_text(&mut doc, &id, "artist");
        let year = take_year(&mut doc, &id);
        let kind = take_text(&mut doc, &id, "type");
        let location = take_text(&mut doc, &id, "location");
        let status = take_text(&mut doc, &id, "status").map(|s| ItemStatus::from(s.as_str()));
        let reg_number = take_text(&mut doc, &id, "regNumber");
        let description = take_text(&mut doc, &id, "description");
        let provenance = take_text(&mut doc, &id, "provenance");
        let condition = take_text(&mut doc, &id, "condition");
        let image = take_text(&mut doc, &id, "image");
        let custom_fields = take_custom_fields(&mut doc, &id);

        Self {
            id,
            title,
            artist,
            year,
            kind,
            location,
            status,
            reg_number,
            description,
            provenance,
            condition,
            image,
            custom_fields,
            extra: doc,
        }
    }

    pub fn is_archived(&self) -> bool {
        matches!(self.status, Some(ItemStatus::Archived))
    }

    pub fn is_on_display(&self) -> bool {
        matches!(self.status, Some(ItemStatus::OnDisplay))
    }

    /// Value of the first custom field whose label is exactly `label`.
    pub fn custom_field(&self, label: &str) -> Option<&str> {
        self.custom_fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

// Fixtures and API clients send items as plain objects with an `id` key, so the
// id is taken from the body here, unlike `from_document`.
impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut doc = Map::<String, Value>::deserialize(deserializer)?;
        let id = match doc.remove("id") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(serde::de::Error::missing_field("id")),
        };
        Ok(Item::from_fields(id, doc))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn take_text(doc: &mut Map<String, Value>, id: &str, key: &str) -> Option<String> {
    let value = doc.remove(key)?;
    if value.is_null() {
        return None;
    }
    let kind = json_kind(&value);
    let text = value_to_text(value);
    if text.is_none() {
        tracing::warn!(item = %id, field = key, kind, "ignoring field with unexpected shape");
    }
    text
}

/// Years outside this range are treated as undated.
pub const YEAR_RANGE: RangeInclusive<i64> = -9999..=9999;

fn take_year(doc: &mut Map<String, Value>, id: &str) -> Option<i64> {
    let limit = *YEAR_RANGE.end() as f64;
    let year = match doc.remove("year")? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= limit)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|y| YEAR_RANGE.contains(y));
    if year.is_none() {
        tracing::debug!(item = %id, "year is not a plausible integer; treating item as undated");
    }
    year
}

fn take_custom_fields(doc: &mut Map<String, Value>, id: &str) -> Vec<CustomField> {
    let Some(value) = doc.remove("customFields") else {
        return Vec::new();
    };
    let Value::Array(entries) = value else {
        tracing::warn!(item = %id, "customFields is not an array; ignoring it");
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let Value::Object(mut entry) = entry else {
                return None;
            };
            let label = entry.remove("label").and_then(value_to_text)?;
            let value = entry
                .remove("value")
                .and_then(value_to_text)
                .unwrap_or_default();
            Some(CustomField { label, value })
        })
        .collect()
}

/// Admin-controlled disclosure flags for the public view.
///
/// `Default` is the fail-closed posture: every flag off. `show_acquisition` is
/// part of the record but nothing is gated on it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilitySettings {
    pub show_location: bool,
    pub show_provenance: bool,
    pub show_reg_number: bool,
    pub show_condition: bool,
    pub show_acquisition: bool,
}

impl VisibilitySettings {
    /// Read flags from a settings document. Only a literal JSON `true` enables
    /// a flag.
    pub fn from_document(body: &Value) -> Self {
        let flag = |key: &str| body.get(key).and_then(Value::as_bool).unwrap_or(false);
        Self {
            show_location: flag("showLocation"),
            show_provenance: flag("showProvenance"),
            show_reg_number: flag("showRegNumber"),
            show_condition: flag("showCondition"),
            show_acquisition: flag("showAcquisition"),
        }
    }
}

impl<'de> Deserialize<'de> for VisibilitySettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let body = Value::deserialize(deserializer)?;
        Ok(Self::from_document(&body))
    }
}

/// One loaded view of the collection: all items plus the settings in force.
///
/// A snapshot is never modified; reloading builds a new one.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub settings: VisibilitySettings,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(items: Vec<Item>, settings: VisibilitySettings) -> Self {
        Self {
            items,
            settings,
            loaded_at: Utc::now(),
        }
    }
}
