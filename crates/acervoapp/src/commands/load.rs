use crate::error::{AcervoError, Result};
use crate::model::{Snapshot, VisibilitySettings};
use crate::store::DataStore;

/// Read the whole collection and the visibility settings into a new snapshot.
///
/// Only the item read can fail the load, and it always fails as
/// [`AcervoError::DataUnavailable`]. The settings read falls back to the
/// all-hidden default whether the document is missing or unreadable. No retry
/// happens here; callers decide whether to offer one.
pub fn run<S: DataStore>(store: &S) -> Result<Snapshot> {
    let items = match store.list_items() {
        Ok(items) => items,
        Err(e @ AcervoError::DataUnavailable(_)) => return Err(e),
        Err(e) => return Err(AcervoError::DataUnavailable(e.to_string())),
    };

    let settings = match store.visibility_settings() {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            tracing::debug!("no visibility settings document; sensitive fields stay hidden");
            VisibilitySettings::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read visibility settings; sensitive fields stay hidden");
            VisibilitySettings::default()
        }
    };

    let snapshot = Snapshot::new(items, settings);
    let archived = snapshot.items.iter().filter(|i| i.is_archived()).count();
    tracing::info!(
        items = snapshot.items.len(),
        archived,
        show_location = snapshot.settings.show_location,
        show_reg_number = snapshot.settings.show_reg_number,
        loaded_at = %snapshot.loaded_at,
        "collection loaded"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn test_load_items_and_settings() {
        let store = InMemoryStore::new();
        store.put_item("1", json!({"title": "Vaso", "status": "Exposto"}));
        store.put_item("2", json!({"title": "Máscara", "status": "Arquivado"}));
        store.put_visibility(json!({"showLocation": true}));

        let snapshot = run(&store).unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert!(snapshot.settings.show_location);
        assert!(!snapshot.settings.show_reg_number);
    }

    #[test]
    fn test_missing_settings_default_to_hidden() {
        let store = InMemoryStore::new();
        store.put_item("1", json!({"title": "Vaso"}));

        let snapshot = run(&store).unwrap();
        assert_eq!(snapshot.settings, VisibilitySettings::default());
    }

    #[test]
    fn test_empty_collection_loads() {
        let store = InMemoryStore::new();
        let snapshot = run(&store).unwrap();
        assert!(snapshot.items.is_empty());
    }

    #[test]
    fn test_item_read_failure_is_data_unavailable() {
        let store = InMemoryStore::new();
        store.put_item("1", json!({"title": "Vaso"}));
        store.backend().set_simulate_read_error(true);

        let err = run(&store).unwrap_err();
        assert!(matches!(err, AcervoError::DataUnavailable(_)));
    }

    #[test]
    fn test_settings_read_failure_does_not_fail_load() {
        let store = InMemoryStore::new();
        store.put_item("1", json!({"title": "Vaso"}));
        store.put_visibility(json!({"showLocation": true}));
        store.backend().set_simulate_settings_error(true);

        let snapshot = run(&store).unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.settings, VisibilitySettings::default());
    }
}
