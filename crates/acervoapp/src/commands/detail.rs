use crate::commands::browse::{self, is_public, GalleryFilter};
use crate::commands::CmdResult;
use crate::error::{AcervoError, Result};
use crate::index::ItemSelector;
use crate::model::{Item, Snapshot};
use crate::visibility::PublicItem;

/// Resolve `selector` to one item and return its public projection.
///
/// Indexes count within the listing `filter` produces. Ids are looked up among
/// public items only, so an archived item is reported as not found rather than
/// shown.
pub fn run(snapshot: &Snapshot, filter: &GalleryFilter, selector: &ItemSelector) -> Result<CmdResult> {
    let item = resolve(snapshot, filter, selector)?;
    tracing::debug!(item = %item.id, "detail selected");
    let public = PublicItem::new(item, &snapshot.settings);
    Ok(CmdResult::default()
        .with_detail(public.redact())
        .with_loaded_at(snapshot.loaded_at))
}

fn resolve<'a>(
    snapshot: &'a Snapshot,
    filter: &GalleryFilter,
    selector: &ItemSelector,
) -> Result<&'a Item> {
    match selector {
        ItemSelector::Index(n) => {
            let listed = browse::select(&snapshot.items, &snapshot.settings, filter);
            n.checked_sub(1)
                .and_then(|i| listed.get(i).copied())
                .ok_or_else(|| {
                    AcervoError::ItemNotFound(format!(
                        "index {} (the listing has {} items)",
                        n,
                        listed.len()
                    ))
                })
        }
        ItemSelector::Id(id) => snapshot
            .items
            .iter()
            .find(|item| item.id == *id && is_public(item))
            .ok_or_else(|| AcervoError::ItemNotFound(id.clone())),
    }
}
