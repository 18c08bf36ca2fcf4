//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{Aggregations, Dataset, FilterState, Focus, ResultsStatus, ViewMode};

/// Default number of datasets per page (a 3x3 card grid).
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Global application state shared by the event, networking, and UI layers.
///
/// Owned by the event loop. Filter and page edits go through
/// [`crate::logic::filters`]; fetched data is applied by the runtime's
/// response handler.
#[derive(Debug)]
pub struct AppState {
    /// Current filter selection; replaced wholesale on every edit.
    pub filters: FilterState,
    /// Current page, 1-based.
    pub page: u32,
    /// Datasets per page.
    pub page_size: u32,
    /// Card grid or list.
    pub view: ViewMode,

    // Fetched snapshot
    /// Datasets on the current page.
    pub datasets: Vec<Dataset>,
    /// Total matches reported by the server.
    pub total: u64,
    /// Facet counts for the current query.
    pub aggregations: Aggregations,
    /// `true` while the latest request is in flight.
    pub loading: bool,
    /// Outcome of the latest request as shown to the user.
    pub status: ResultsStatus,

    // Request coordination
    /// Identifier of the latest request whose response will be applied.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,

    // Interaction
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Caret position inside `filters.query`, in characters.
    pub search_caret: usize,
    /// Highlighted row across all facet sections of the sidebar.
    pub facet_cursor: usize,
    /// Index into `datasets` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the list view.
    pub list_state: ListState,
    /// Active modal dialog, if any.
    pub modal: Modal,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            view: ViewMode::default(),
            datasets: Vec::new(),
            total: 0,
            aggregations: Aggregations::default(),
            loading: false,
            status: ResultsStatus::Idle,
            latest_request_id: 0,
            next_request_id: 1,
            focus: Focus::default(),
            search_caret: 0,
            facet_cursor: 0,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
        }
    }
}

impl AppState {
    /// Dataset under the results cursor.
    #[must_use]
    pub fn selected_dataset(&self) -> Option<&Dataset> {
        self.datasets.get(self.selected)
    }

    /// What: Move the results cursor by `delta`, clamped to the current page.
    ///
    /// Inputs:
    /// - `delta`: Signed row offset.
    ///
    /// Output:
    /// - Updates `selected` and the list view selection.
    pub fn move_selection(&mut self, delta: isize) {
        if self.datasets.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let last = self.datasets.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(self.selected));
    }
}
