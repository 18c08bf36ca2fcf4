use crate::sources::FetchOutcome;
use crate::state::{Aggregations, AppState, FetchResponse, ResultsStatus, SearchPage};

/// What: Replace the fetched snapshot with `page` in one step.
fn apply_page(app: &mut AppState, page: SearchPage) {
    app.datasets = page.results;
    app.total = page.total;
    app.aggregations = page.aggregations;
}

/// What: Apply a fetch response to the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `resp`: Response from the search worker
///
/// Output:
/// - `true` when the response was applied; `false` when it was stale and dropped.
///
/// Details:
/// - Only the response to `latest_request_id` is applied, so the last request issued wins
///   regardless of arrival order.
/// - Sample data is shown with a status naming the failure; a plain failure empties the results.
/// - Selection resets to the first dataset of the new page.
pub fn handle_fetch_response(app: &mut AppState, resp: FetchResponse) -> bool {
    if resp.id != app.latest_request_id {
        tracing::debug!(
            id = resp.id,
            latest = app.latest_request_id,
            "[Runtime] dropping stale response"
        );
        return false;
    }
    app.loading = false;
    app.status = match resp.outcome {
        FetchOutcome::Live(page) => {
            let empty = page.results.is_empty();
            apply_page(app, page);
            if empty {
                ResultsStatus::Empty
            } else {
                ResultsStatus::Ready
            }
        }
        FetchOutcome::Fallback { page, error } => {
            apply_page(app, page);
            ResultsStatus::SampleData {
                reason: error.to_string(),
            }
        }
        FetchOutcome::Failed(error) => {
            apply_page(
                app,
                SearchPage {
                    results: Vec::new(),
                    total: 0,
                    aggregations: Aggregations::default(),
                },
            );
            ResultsStatus::Failed {
                reason: error.to_string(),
            }
        }
    };
    app.selected = 0;
    app.list_state
        .select(if app.datasets.is_empty() { None } else { Some(0) });
    tracing::debug!(
        id = resp.id,
        results = app.datasets.len(),
        total = app.total,
        "[Runtime] applied response"
    );
    true
}
