//! Filter options derived from the loaded collection.
//!
//! Facets are computed over public (non-archived) items only, and through the
//! visibility policy: while `showLocation` is off the location facet is empty,
//! so the UI never offers a choice that would disclose where things are.

use crate::commands::browse::is_public;
use crate::commands::CmdResult;
use crate::model::{Item, Snapshot, VisibilitySettings};
use crate::visibility::PublicItem;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    /// Distinct types, ascending.
    pub types: Vec<String>,
    /// Distinct locations, ascending. Empty while locations are hidden.
    pub locations: Vec<String>,
    /// Distinct years, newest first.
    pub years: Vec<i64>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn facet_options(items: &[Item], settings: &VisibilitySettings) -> FacetOptions {
    let mut types = BTreeSet::new();
    let mut locations = BTreeSet::new();
    let mut years = BTreeSet::new();

    for item in items.iter().filter(|item| is_public(item)) {
        let public = PublicItem::new(item, settings);
        if let Some(kind) = non_blank(public.kind()) {
            types.insert(kind.to_string());
        }
        if let Some(location) = non_blank(public.location()) {
            locations.insert(location.to_string());
        }
        if let Some(year) = public.year() {
            years.insert(year);
        }
    }

    FacetOptions {
        types: types.into_iter().collect(),
        locations: locations.into_iter().collect(),
        years: years.into_iter().rev().collect(),
    }
}

pub fn run(snapshot: &Snapshot) -> CmdResult {
    let facets = facet_options(&snapshot.items, &snapshot.settings);
    tracing::debug!(
        types = facets.types.len(),
        locations = facets.locations.len(),
        years = facets.years.len(),
        "facets derived"
    );
    CmdResult::default()
        .with_facets(facets)
        .with_loaded_at(snapshot.loaded_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemStatus;

    fn item(id: &str, kind: &str, location: &str, year: Option<i64>, status: &str) -> Item {
        Item {
            kind: Some(kind.to_string()),
            location: Some(location.to_string()),
            year,
            status: Some(ItemStatus::from(status)),
            ..Item::new(id)
        }
    }

    fn collection() -> Vec<Item> {
        vec![
            item("1", "Escultura", "Sala 2", Some(1950), "Exposto"),
            item("2", "Cerâmica", "Reserva Técnica", Some(1890), "Reserva"),
            item("3", "Cerâmica", "Sala 1", None, "Exposto"),
            item("4", "Tapeçaria", "Cofre", Some(2001), "Arquivado"),
            item("5", "  ", "", Some(1950), "Exposto"),
        ]
    }

    #[test]
    fn test_types_are_distinct_sorted_and_skip_archived() {
        let facets = facet_options(&collection(), &VisibilitySettings::default());
        assert_eq!(facets.types, vec!["Cerâmica", "Escultura"]);
    }

    #[test]
    fn test_years_are_distinct_and_descending() {
        let facets = facet_options(&collection(), &VisibilitySettings::default());
        assert_eq!(facets.years, vec![1950, 1890]);
    }

    #[test]
    fn test_locations_hidden_by_default() {
        let facets = facet_options(&collection(), &VisibilitySettings::default());
        assert!(facets.locations.is_empty());
    }

    #[test]
    fn test_locations_when_disclosed() {
        let settings = VisibilitySettings {
            show_location: true,
            ..Default::default()
        };
        let facets = facet_options(&collection(), &settings);
        assert_eq!(facets.locations, vec!["Reserva Técnica", "Sala 1", "Sala 2"]);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(
            facet_options(&[], &VisibilitySettings::default()),
            FacetOptions::default()
        );
    }

    #[test]
    fn test_run_wraps_facets() {
        let snapshot = Snapshot::new(collection(), VisibilitySettings::default());
        let result = run(&snapshot);
        assert_eq!(result.facets.unwrap().types.len(), 2);
    }
}
