//! Application state definitions.
//!
//! Contains the screen state machine (AppMode) and the navigator state
//! (AppState): which screen is current, which record is selected, and the
//! route carried into the detail screen.

use crate::catalog::{Catalog, PuppyRecord};
use crate::route::DetailRoute;

/// Application screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Puppy list - entry point, shows the whole catalog
    PuppyList,
    /// Puppy details - one selected record
    PuppyDetails,
}

/// Main application state.
///
/// Only ever mutated on the UI thread in response to a single key event at a
/// time; no locking discipline is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen
    pub mode: AppMode,
    /// The fixed catalog, constructed once at startup
    pub catalog: Catalog,
    /// Selection index into the catalog list
    pub list_selection: usize,
    /// Route carried into the detail screen; `Some` only in `PuppyDetails`
    pub detail: Option<DetailRoute>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Create the initial state: list screen, first record selected.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            mode: AppMode::PuppyList,
            catalog,
            list_selection: 0,
            detail: None,
            status_message: "Welcome to the puppy catalog".to_string(),
            help_visible: false,
        }
    }

    /// The record under the list cursor.
    pub fn selected_record(&self) -> Option<&PuppyRecord> {
        self.catalog.get(self.list_selection)
    }

    /// Move the list cursor up one entry, clamped at the top.
    pub fn select_previous(&mut self) {
        self.list_selection = self.list_selection.saturating_sub(1);
    }

    /// Move the list cursor down one entry, clamped at the last record.
    pub fn select_next(&mut self) {
        if self.list_selection + 1 < self.catalog.len() {
            self.list_selection += 1;
        }
    }

    /// Transition `PuppyList -> PuppyDetails`, carrying the selected
    /// record's fields in a [`DetailRoute`] with no transformation.
    ///
    /// A no-op if the cursor is somehow not over a record.
    pub fn open_details(&mut self) {
        if let Some(record) = self.selected_record() {
            let route = DetailRoute::from_record(record);
            self.status_message = format!("Viewing {}", route.breed_text());
            self.detail = Some(route);
            self.mode = AppMode::PuppyDetails;
        }
    }

    /// Transition back to the list screen. The list selection is untouched,
    /// so the cursor lands where the user left it.
    pub fn close_details(&mut self) {
        self.detail = None;
        self.mode = AppMode::PuppyList;
        self.status_message = "Welcome to the puppy catalog".to_string();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}
