//! # Visibility Redaction Policy
//!
//! The public gallery shows a subset of what the catalog knows. Four fields are
//! sensitive and stay hidden unless the admin discloses them:
//!
//! | Field | Flag |
//! |-------|------|
//! | `location` | `showLocation` |
//! | `provenance` | `showProvenance` |
//! | `regNumber` | `showRegNumber` |
//! | `condition` | `showCondition` |
//!
//! Everything else is always visible. Missing settings mean every flag is off.
//!
//! ## One Decorator, Two Concerns
//!
//! Hiding a field has to affect both what is *matched* (search, filters, facets)
//! and what is *shown* (cards, detail view). Rather than checking flags at each
//! of those sites, [`PublicItem`] wraps an item and answers field reads through
//! the policy. The filter engine and the presentation layer both read through
//! it, so a hidden field is simply absent for them.
//!
//! ## The Exhibition Badge
//!
//! `status` is not sensitive, but "on exhibition" is only meaningful next to a
//! location. The badge is shown only when `showLocation` is on and the item is
//! `Exposto`. For the same reason the card's location label is withheld
//! entirely while locations are hidden: printing "Acervo Reserva" for every
//! non-exhibited item would reveal the exhibited ones by elimination.
//!
//! ## What Never Leaves
//!
//! Unknown document fields ([`Item::extra`]) are not part of [`RedactedItem`].
//! Nobody has classified them, so they are not published.

use crate::attributes::{AttrValue, Attributes, Field};
use crate::model::{CustomField, Item, ItemStatus, VisibilitySettings};
use serde::Serialize;

pub const EXHIBITION_LABEL: &str = "Em Exposição";
pub const RESERVE_LABEL: &str = "Acervo Reserva";
pub const NO_DESCRIPTION: &str = "Nenhuma descrição disponível para esta obra.";

impl VisibilitySettings {
    /// Whether `field` may be matched on and displayed. Always true for fields
    /// that are not sensitive.
    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::Location => self.show_location,
            Field::Provenance => self.show_provenance,
            Field::RegNumber => self.show_reg_number,
            Field::Condition => self.show_condition,
            _ => true,
        }
    }

    pub fn shows_exhibition_badge(&self, item: &Item) -> bool {
        self.show_location && item.is_on_display()
    }
}

/// An item as the public is allowed to see it.
#[derive(Debug, Clone, Copy)]
pub struct PublicItem<'a> {
    item: &'a Item,
    settings: &'a VisibilitySettings,
}

impl<'a> PublicItem<'a> {
    pub fn new(item: &'a Item, settings: &'a VisibilitySettings) -> Self {
        Self { item, settings }
    }

    fn gated(&self, field: Field, value: &'a Option<String>) -> Option<&'a str> {
        if self.settings.is_visible(field) {
            value.as_deref()
        } else {
            None
        }
    }

    pub fn id(&self) -> &'a str {
        &self.item.id
    }

    pub fn title(&self) -> Option<&'a str> {
        self.item.title.as_deref()
    }

    pub fn artist(&self) -> Option<&'a str> {
        self.item.artist.as_deref()
    }

    pub fn year(&self) -> Option<i64> {
        self.item.year
    }

    pub fn kind(&self) -> Option<&'a str> {
        self.item.kind.as_deref()
    }

    pub fn status(&self) -> Option<&'a ItemStatus> {
        self.item.status.as_ref()
    }

    pub fn description(&self) -> Option<&'a str> {
        self.item.description.as_deref()
    }

    pub fn image(&self) -> Option<&'a str> {
        self.item.image.as_deref()
    }

    pub fn custom_fields(&self) -> &'a [CustomField] {
        &self.item.custom_fields
    }

    pub fn location(&self) -> Option<&'a str> {
        self.gated(Field::Location, &self.item.location)
    }

    pub fn reg_number(&self) -> Option<&'a str> {
        self.gated(Field::RegNumber, &self.item.reg_number)
    }

    pub fn provenance(&self) -> Option<&'a str> {
        self.gated(Field::Provenance, &self.item.provenance)
    }

    pub fn condition(&self) -> Option<&'a str> {
        self.gated(Field::Condition, &self.item.condition)
    }

    pub fn exhibition_badge(&self) -> bool {
        self.settings.shows_exhibition_badge(self.item)
    }

    /// "Em Exposição: Sala 2" or "Acervo Reserva"; `None` while locations are
    /// hidden.
    pub fn location_label(&self) -> Option<String> {
        if !self.settings.show_location {
            return None;
        }
        if !self.exhibition_badge() {
            return Some(RESERVE_LABEL.to_string());
        }
        Some(match self.location() {
            Some(location) if !location.trim().is_empty() => {
                format!("{}: {}", EXHIBITION_LABEL, location)
            }
            _ => EXHIBITION_LABEL.to_string(),
        })
    }

    /// "Artist, 1950", with either part left out when absent.
    pub fn byline(&self) -> Option<String> {
        let year = self.year().map(|y| y.to_string());
        let parts: Vec<&str> = [self.artist(), year.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    pub fn description_or_default(&self) -> &'a str {
        match self.description() {
            Some(d) if !d.trim().is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }

    /// Owned projection for the presentation layer.
    pub fn redact(&self) -> RedactedItem {
        let owned = |v: Option<&str>| v.map(str::to_string);
        RedactedItem {
            id: self.id().to_string(),
            title: owned(self.title()),
            artist: owned(self.artist()),
            year: self.year(),
            kind: owned(self.kind()),
            status: self.status().map(|s| s.as_str().to_string()),
            description: owned(self.description()),
            image: owned(self.image()),
            custom_fields: self.custom_fields().to_vec(),
            location: owned(self.location()),
            reg_number: owned(self.reg_number()),
            provenance: owned(self.provenance()),
            condition: owned(self.condition()),
            on_exhibition: self.exhibition_badge(),
            location_label: self.location_label(),
            byline: self.byline(),
        }
    }
}

impl Attributes for PublicItem<'_> {
    fn get_attr(&self, field: Field) -> Option<AttrValue> {
        if !self.settings.is_visible(field) {
            return None;
        }
        self.item.get_attr(field)
    }
}

/// The public projection of an item. Hidden fields are `None` and are left
/// out of serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub on_exhibition: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,
}

impl RedactedItem {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }

    pub fn custom_field(&self, label: &str) -> Option<&str> {
        self.custom_fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttrFilter, FIELDS};
    use serde_json::json;

    fn sensitive_item() -> Item {
        Item {
            title: Some("Vaso".into()),
            artist: Some("Anônimo".into()),
            year: Some(1950),
            location: Some("Sala 2".into()),
            status: Some(ItemStatus::OnDisplay),
            reg_number: Some("R1".into()),
            provenance: Some("Doação da família Silva".into()),
            condition: Some("Restaurado".into()),
            ..Item::new("1")
        }
    }

    fn all_on() -> VisibilitySettings {
        VisibilitySettings {
            show_location: true,
            show_provenance: true,
            show_reg_number: true,
            show_condition: true,
            show_acquisition: true,
        }
    }

    #[test]
    fn test_default_settings_hide_every_sensitive_field() {
        let settings = VisibilitySettings::default();
        for field in FIELDS {
            assert_eq!(settings.is_visible(*field), !field.is_sensitive(), "{}", field);
        }
    }

    #[test]
    fn test_flags_disclose_their_field_only() {
        let settings = VisibilitySettings {
            show_provenance: true,
            ..Default::default()
        };
        assert!(settings.is_visible(Field::Provenance));
        assert!(!settings.is_visible(Field::Location));
        assert!(!settings.is_visible(Field::RegNumber));
        assert!(!settings.is_visible(Field::Condition));
    }

    #[test]
    fn test_missing_flags_in_document_hide_fields() {
        let settings = VisibilitySettings::from_document(&json!({"showCondition": true}));
        assert!(settings.is_visible(Field::Condition));
        assert!(!settings.is_visible(Field::Location));
        assert!(!settings.is_visible(Field::Provenance));
        assert!(!settings.is_visible(Field::RegNumber));
    }

    #[test]
    fn test_public_item_hides_sensitive_values() {
        let item = sensitive_item();
        let settings = VisibilitySettings::default();
        let public = PublicItem::new(&item, &settings);

        assert_eq!(public.title(), Some("Vaso"));
        assert_eq!(public.location(), None);
        assert_eq!(public.reg_number(), None);
        assert_eq!(public.provenance(), None);
        assert_eq!(public.condition(), None);
        assert_eq!(public.get_attr(Field::Location), None);
        assert_eq!(public.get_attr(Field::Title), Some(AttrValue::Text("Vaso".into())));
    }

    #[test]
    fn test_public_item_discloses_when_allowed() {
        let item = sensitive_item();
        let settings = all_on();
        let public = PublicItem::new(&item, &settings);

        assert_eq!(public.location(), Some("Sala 2"));
        assert_eq!(public.reg_number(), Some("R1"));
        assert_eq!(public.provenance(), Some("Doação da família Silva"));
        assert_eq!(public.condition(), Some("Restaurado"));
    }

    #[test]
    fn test_hidden_location_never_matches_a_filter() {
        let item = sensitive_item();
        let hidden = VisibilitySettings::default();
        let shown = all_on();
        let filter = AttrFilter::eq(Field::Location, "Sala 2");

        assert!(filter.matches(&item));
        assert!(!filter.matches(&PublicItem::new(&item, &hidden)));
        assert!(filter.matches(&PublicItem::new(&item, &shown)));
    }

    #[test]
    fn test_exhibition_badge_requires_location_flag() {
        let item = sensitive_item();
        let hidden = VisibilitySettings::default();
        let shown = VisibilitySettings {
            show_location: true,
            ..Default::default()
        };

        assert!(!PublicItem::new(&item, &hidden).exhibition_badge());
        assert!(PublicItem::new(&item, &shown).exhibition_badge());

        let stored = Item {
            status: Some(ItemStatus::Other("Em Restauração".into())),
            ..sensitive_item()
        };
        assert!(!PublicItem::new(&stored, &shown).exhibition_badge());
    }

    #[test]
    fn test_location_label() {
        let shown = VisibilitySettings {
            show_location: true,
            ..Default::default()
        };
        let hidden = VisibilitySettings::default();

        let on_display = sensitive_item();
        assert_eq!(
            PublicItem::new(&on_display, &shown).location_label().as_deref(),
            Some("Em Exposição: Sala 2")
        );
        assert_eq!(PublicItem::new(&on_display, &hidden).location_label(), None);

        let stored = Item {
            status: None,
            ..sensitive_item()
        };
        assert_eq!(
            PublicItem::new(&stored, &shown).location_label().as_deref(),
            Some("Acervo Reserva")
        );
        assert_eq!(PublicItem::new(&stored, &hidden).location_label(), None);

        let nowhere = Item {
            location: None,
            ..sensitive_item()
        };
        assert_eq!(
            PublicItem::new(&nowhere, &shown).location_label().as_deref(),
            Some("Em Exposição")
        );
    }

    #[test]
    fn test_byline() {
        let settings = VisibilitySettings::default();
        let item = sensitive_item();
        assert_eq!(
            PublicItem::new(&item, &settings).byline().as_deref(),
            Some("Anônimo, 1950")
        );

        let undated = Item {
            year: None,
            ..sensitive_item()
        };
        assert_eq!(
            PublicItem::new(&undated, &settings).byline().as_deref(),
            Some("Anônimo")
        );

        let bare = Item::new("2");
        assert_eq!(PublicItem::new(&bare, &settings).byline(), None);
    }

    #[test]
    fn test_description_fallback() {
        let settings = VisibilitySettings::default();
        let item = Item {
            description: Some("  ".into()),
            ..Item::new("1")
        };
        let public = PublicItem::new(&item, &settings);
        assert_eq!(public.description_or_default(), NO_DESCRIPTION);
        assert_eq!(public.redact().description_or_default(), NO_DESCRIPTION);
    }

    #[test]
    fn test_redacted_output_omits_hidden_and_unknown_fields() {
        let mut item = sensitive_item();
        item.extra.insert("acquisitionPrice".into(), json!(1000));
        let settings = VisibilitySettings::default();

        let out = serde_json::to_value(PublicItem::new(&item, &settings).redact()).unwrap();
        let obj = out.as_object().unwrap();
        for hidden in ["location", "regNumber", "provenance", "condition", "acquisitionPrice"] {
            assert!(!obj.contains_key(hidden), "{} leaked", hidden);
        }
        assert_eq!(out["title"], json!("Vaso"));
        assert_eq!(out["onExhibition"], json!(false));
    }
}
