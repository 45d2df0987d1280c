//! # Attribute System
//!
//! Every place that reads an item field by name goes through this module: text
//! search, categorical filters, facets and the detail view. Centralizing field
//! access is what lets the visibility policy sit in one place, as a decorator
//! over [`Attributes`], instead of being re-checked at every call site.
//!
//! ## Pieces
//!
//! | Type | Role |
//! |------|------|
//! | [`Field`] | Every item field, by its document name, and whether it is sensitive |
//! | [`AttrValue`] | A field's value: text, number, or a list of custom fields |
//! | [`Attributes`] | Field access; implemented by `Item` (raw) and `PublicItem` (redacted) |
//! | [`AttrFilter`] | One predicate clause over a field |
//!
//! ## Usage
//!
//! ```ignore
//! let public = PublicItem::new(&item, &settings);
//! let filter = AttrFilter::eq(Field::Location, AttrValue::Text("Sala 2".into()));
//! // false when `showLocation` is off, whatever the stored location is
//! filter.matches(&public);
//! ```

mod field;
mod filter;
mod value;

pub use field::{Field, FIELDS};
pub use filter::{AttrFilter, FilterOp};
pub use value::AttrValue;

use crate::model::Item;

/// Read access to item fields by [`Field`].
///
/// Returns `None` when the field is absent (or hidden, for redacting sources).
pub trait Attributes {
    fn get_attr(&self, field: Field) -> Option<AttrValue>;
}

impl Attributes for Item {
    fn get_attr(&self, field: Field) -> Option<AttrValue> {
        let text = |v: &Option<String>| v.clone().map(AttrValue::Text);
        match field {
            Field::Title => text(&self.title),
            Field::Artist => text(&self.artist),
            Field::Year => self.year.map(AttrValue::Number),
            Field::Type => text(&self.kind),
            Field::Location => text(&self.location),
            Field::Status => self
                .status
                .as_ref()
                .map(|s| AttrValue::Text(s.as_str().to_string())),
            Field::RegNumber => text(&self.reg_number),
            Field::Description => text(&self.description),
            Field::Provenance => text(&self.provenance),
            Field::Condition => text(&self.condition),
            Field::Image => text(&self.image),
            Field::CustomFields => {
                if self.custom_fields.is_empty() {
                    None
                } else {
                    Some(AttrValue::Fields(self.custom_fields.clone()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomField, ItemStatus};

    #[test]
    fn test_item_get_attr() {
        let item = Item {
            title: Some("Vaso".into()),
            year: Some(1950),
            status: Some(ItemStatus::OnDisplay),
            custom_fields: vec![CustomField {
                label: "Material".into(),
                value: "Barro".into(),
            }],
            ..Item::new("1")
        };

        assert_eq!(item.get_attr(Field::Title), Some(AttrValue::Text("Vaso".into())));
        assert_eq!(item.get_attr(Field::Year), Some(AttrValue::Number(1950)));
        assert_eq!(
            item.get_attr(Field::Status),
            Some(AttrValue::Text("Exposto".into()))
        );
        assert!(matches!(
            item.get_attr(Field::CustomFields),
            Some(AttrValue::Fields(ref f)) if f.len() == 1
        ));
        assert_eq!(item.get_attr(Field::Artist), None);
    }

    #[test]
    fn test_empty_custom_fields_is_absent() {
        assert_eq!(Item::new("1").get_attr(Field::CustomFields), None);
    }
}
