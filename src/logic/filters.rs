//! Filter and page edits. Every edit replaces the filter state wholesale and issues a fetch.

use tokio::sync::mpsc;

use crate::logic::pager::{clamp_page, total_pages};
use crate::logic::query::send_fetch;
use crate::state::{AppState, Facet, FetchRequest, FilterState};

/// What: Commit new filters, reset to page 1 and fetch.
fn commit_filters(app: &mut AppState, next: FilterState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    app.filters = next;
    app.page = 1;
    send_fetch(app, fetch_tx);
}

/// Replace the free-text query.
pub fn set_query_text(app: &mut AppState, text: &str, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let next = app.filters.with_query(text);
    commit_filters(app, next, fetch_tx);
}

/// What: Check or uncheck one facet option.
///
/// Inputs:
/// - `facet`, `label`: Option to change.
/// - `checked`: Desired state.
///
/// Details:
/// - Multi-select facets add or remove the label; geography is set or cleared.
pub fn set_facet_option(
    app: &mut AppState,
    facet: Facet,
    label: &str,
    checked: bool,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) {
    tracing::debug!(facet = facet.wire_key(), label, checked, "[Filters] option changed");
    let next = app.filters.with_option(facet, label, checked);
    commit_filters(app, next, fetch_tx);
}

/// Flip one facet option relative to its current state.
pub fn toggle_facet_option(
    app: &mut AppState,
    facet: Facet,
    label: &str,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) {
    let checked = !app.filters.is_checked(facet, label);
    set_facet_option(app, facet, label, checked, fetch_tx);
}

/// Clear every filter field in one replacement.
pub fn clear_all_filters(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    commit_filters(app, FilterState::default(), fetch_tx);
}

/// What: Move to `requested`, clamped to the pages the last response reported.
///
/// Output:
/// - `true` when the page changed and a fetch was issued.
pub fn go_to_page(app: &mut AppState, requested: i64, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    let page = clamp_page(requested, total_pages(app.total, app.page_size));
    if page == app.page {
        return false;
    }
    app.page = page;
    send_fetch(app, fetch_tx);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<FetchRequest>) -> Vec<FetchRequest> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    /// What: Checking then unchecking a sector restores the filters and resets the page each time.
    fn toggle_round_trip_resets_page() {
        let mut app = AppState {
            page: 4,
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        toggle_facet_option(&mut app, Facet::Sectors, "Budget", &tx);
        assert_eq!(app.filters.sectors.joined(), "Budget");
        assert_eq!(app.page, 1);
        app.page = 2;
        toggle_facet_option(&mut app, Facet::Sectors, "Budget", &tx);
        assert!(app.filters.sectors.is_empty());
        assert_eq!(app.page, 1);
        let sent = drain(&mut rx);
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].filters.sectors.joined(), "Budget");
        assert_eq!(sent[1].id, app.latest_request_id);
    }

    #[test]
    /// What: Query edits leave facets alone; clear-all empties everything at once.
    fn query_edit_and_clear_all() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        set_facet_option(&mut app, Facet::Formats, "CSV", true, &tx);
        set_facet_option(&mut app, Facet::Geography, "Assam", true, &tx);
        set_query_text(&mut app, "roads", &tx);
        assert_eq!(app.filters.query, "roads");
        assert_eq!(app.filters.formats.joined(), "CSV");
        assert_eq!(app.filters.geography.as_deref(), Some("Assam"));

        app.page = 3;
        clear_all_filters(&mut app, &tx);
        assert!(app.filters.is_empty());
        assert_eq!(app.page, 1);
        assert_eq!(drain(&mut rx).len(), 4);
    }

    #[test]
    /// What: Page requests are clamped and only a real change fetches.
    ///
    /// Inputs:
    /// - 47 results at 9 per page (6 pages).
    fn go_to_page_clamps_and_skips_noop() {
        let mut app = AppState {
            total: 47,
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!go_to_page(&mut app, 0, &tx));
        assert!(go_to_page(&mut app, 99, &tx));
        assert_eq!(app.page, 6);
        assert!(!go_to_page(&mut app, 7, &tx));
        assert!(go_to_page(&mut app, 5, &tx));
        let sent = drain(&mut rx);
        assert_eq!(sent.iter().map(|r| r.page).collect::<Vec<_>>(), vec![6, 5]);
    }
}
