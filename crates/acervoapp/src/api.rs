//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all gallery operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the collection into a [`Session`] and reloads it on request
//! - **Normalizes inputs** (blank selections become "no constraint", selector
//!   strings become [`ItemSelector`]s)
//! - **Returns structured types** (`CmdResult`, `Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O formatting**: No stdout, stderr, or terminal styling
//!
//! ## Sessions
//!
//! A [`Session`] is one visitor's view: a loaded [`Snapshot`] plus the filter
//! they have built up. Every output (`results`, `facets`, `show`) is recomputed
//! from those two values, so changing any filter input is reflected by the very
//! next call.
//!
//! Settings are read once per load. A reload replaces the snapshot in one step
//! and keeps the visitor's filter, even when a selection no longer matches
//! anything. A failed reload keeps the previous snapshot.
//!
//! ## Generic Over DataStore
//!
//! `GalleryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `GalleryApi<FileStore>`
//! - Testing: `GalleryApi<InMemoryStore>`

use crate::attributes::Field;
use crate::commands;
use crate::commands::browse::{normalize_selection, GalleryFilter, SortKey};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::{Snapshot, VisibilitySettings};
use crate::store::DataStore;
use std::sync::Arc;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for the gallery.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct GalleryApi<S: DataStore> {
    store: S,
    default_sort: SortKey,
}

impl<S: DataStore> GalleryApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_sort: SortKey::default(),
        }
    }

    /// Ordering new sessions start with, and that `clear_filters` returns to.
    pub fn with_default_sort(mut self, sort: SortKey) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn default_sort(&self) -> SortKey {
        self.default_sort
    }

    /// Load the collection and open a session with an empty filter.
    pub fn load(&self) -> Result<Session> {
        let snapshot = commands::load::run(&self.store)?;
        Ok(Session::new(snapshot, self.default_sort))
    }

    /// Replace the session's snapshot with a fresh load.
    ///
    /// On error the session is left untouched.
    pub fn reload(&self, session: &mut Session) -> Result<()> {
        let snapshot = commands::load::run(&self.store)?;
        session.snapshot = Arc::new(snapshot);
        Ok(())
    }
}

/// One visitor's browsing state over a loaded snapshot.
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: Arc<Snapshot>,
    filter: GalleryFilter,
    default_sort: SortKey,
}

impl Session {
    pub fn new(snapshot: Snapshot, default_sort: SortKey) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            filter: GalleryFilter::with_sort(default_sort),
            default_sort,
        }
    }

    /// The snapshot in force. Holding the `Arc` keeps it alive across reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn settings(&self) -> &VisibilitySettings {
        &self.snapshot.settings
    }

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn select_type(&mut self, kind: Option<String>) {
        self.filter.kind = normalize_selection(kind);
    }

    pub fn select_location(&mut self, location: Option<String>) {
        self.filter.location = normalize_selection(location);
    }

    pub fn select_year(&mut self, year: Option<i64>) {
        self.filter.year = year;
    }

    pub fn select_status(&mut self, status: Option<String>) {
        self.filter.status = normalize_selection(status);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    /// Set every filter input at once.
    pub fn apply_filter(&mut self, filter: GalleryFilter) {
        let GalleryFilter {
            search_term,
            kind,
            location,
            year,
            status,
            sort,
        } = filter;
        self.set_search_term(search_term);
        self.select_type(kind);
        self.select_location(location);
        self.select_year(year);
        self.select_status(status);
        self.set_sort(sort);
    }

    /// Back to an empty filter and the default ordering.
    pub fn clear_filters(&mut self) {
        self.filter = GalleryFilter::with_sort(self.default_sort);
    }

    /// The filtered, ordered, redacted listing.
    pub fn results(&self) -> CmdResult {
        commands::browse::run(&self.snapshot, &self.filter)
    }

    /// Dropdown options for the filter controls.
    pub fn facets(&self) -> CmdResult {
        commands::facets::run(&self.snapshot)
    }

    /// Detail view for one item: a 1-based listing index, a bare id, or `id:<id>`.
    pub fn show(&self, selector: &str) -> Result<CmdResult> {
        let selector: ItemSelector = selector.parse()?;
        commands::detail::run(&self.snapshot, &self.filter, &selector)
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.snapshot.settings.is_visible(field)
    }
}
