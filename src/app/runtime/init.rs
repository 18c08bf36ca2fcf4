use crate::state::{AppState, FilterState, ViewMode};
use crate::theme::Settings;

/// Filters, page and view requested on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Filters applied to the first request.
    pub filters: FilterState,
    /// First page to show (1-based; 0 is treated as 1).
    pub page: u32,
    /// View override; `None` uses `default_view` from settings.
    pub view: Option<ViewMode>,
}

/// What: Build the initial application state from settings and startup options.
///
/// Output:
/// - State ready for the first fetch; the search caret sits at the end of the query.
#[must_use]
pub fn initialize_app_state(settings: &Settings, startup: StartupOptions) -> AppState {
    let search_caret = startup.filters.query.chars().count();
    AppState {
        filters: startup.filters,
        page: startup.page.max(1),
        page_size: settings.page_size,
        view: startup.view.unwrap_or(settings.default_view),
        search_caret,
        ..AppState::default()
    }
}
