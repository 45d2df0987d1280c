//! # Item Identifiers: Store Id vs Display Index
//!
//! Items carry opaque ids assigned by the document store. They are the only
//! stable reference, but nobody wants to type `kq3Vf0cXb2lEJ1tM8aZp` to open a
//! detail view. Listings therefore number their results 1..N in the order they
//! are shown, and the detail view accepts either form.
//!
//! ## Selector Grammar
//!
//! - **Display index**: a positive integer (`3`) picks the third result of the
//!   current listing. The same filters must be in force, or it picks something
//!   else.
//! - **Explicit id**: `id:<id>` always looks the item up by id. Use it when ids
//!   are themselves numeric.
//! - **Bare id**: anything else is taken as an id.

use crate::error::{AcervoError, Result};
use crate::visibility::RedactedItem;
use serde::Serialize;
use std::str::FromStr;

/// A listed item paired with its 1-based position in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    pub item: RedactedItem,
}

/// Numbers items in the order given.
pub fn index_items(items: Vec<RedactedItem>) -> Vec<DisplayItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem { index: i + 1, item })
        .collect()
}

/// How the user refers to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(usize),
    Id(String),
}

impl FromStr for ItemSelector {
    type Err = AcervoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix("id:") {
            let id = id.trim();
            if id.is_empty() {
                return Err(AcervoError::Api("Empty item id".to_string()));
            }
            return Ok(ItemSelector::Id(id.to_string()));
        }
        if s.is_empty() {
            return Err(AcervoError::Api("Empty item selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(ItemSelector::Index(n)),
            _ => Ok(ItemSelector::Id(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redacted(id: &str) -> RedactedItem {
        RedactedItem {
            id: id.to_string(),
            title: None,
            artist: None,
            year: None,
            kind: None,
            status: None,
            description: None,
            image: None,
            custom_fields: Vec::new(),
            location: None,
            reg_number: None,
            provenance: None,
            condition: None,
            on_exhibition: false,
            location_label: None,
            byline: None,
        }
    }

    #[test]
    fn test_index_items_is_one_based() {
        let listed = index_items(vec![redacted("a"), redacted("b")]);
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].item.id, "a");
        assert_eq!(listed[1].index, 2);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!("3".parse::<ItemSelector>().unwrap(), ItemSelector::Index(3));
        assert_eq!(" 12 ".parse::<ItemSelector>().unwrap(), ItemSelector::Index(12));
    }

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(
            "kq3Vf0cX".parse::<ItemSelector>().unwrap(),
            ItemSelector::Id("kq3Vf0cX".into())
        );
        assert_eq!("0".parse::<ItemSelector>().unwrap(), ItemSelector::Id("0".into()));
        assert_eq!("-1".parse::<ItemSelector>().unwrap(), ItemSelector::Id("-1".into()));
    }

    #[test]
    fn test_parse_explicit_id() {
        assert_eq!("id:3".parse::<ItemSelector>().unwrap(), ItemSelector::Id("3".into()));
        assert!("id:".parse::<ItemSelector>().is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!("".parse::<ItemSelector>().is_err());
        assert!("   ".parse::<ItemSelector>().is_err());
    }
}
