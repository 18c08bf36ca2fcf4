use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest, ResultsStatus};

/// What: Issue a fetch for the current filters and page with a fresh request id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_request_id` and `latest_request_id`
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - Sends a `FetchRequest` snapshot and marks the state as loading.
///
/// Details:
/// - The id lets the event loop discard responses to superseded requests.
pub fn send_fetch(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let id = app.next_request_id;
    app.next_request_id += 1;
    app.latest_request_id = id;
    app.loading = true;
    app.status = ResultsStatus::Loading;
    tracing::debug!(id, page = app.page, "[Query] issuing fetch");
    let _ = fetch_tx.send(FetchRequest {
        id,
        filters: app.filters.clone(),
        page: app.page,
        size: app.page_size,
    });
}
