use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::sources::SearchClient;
use crate::state::{FetchRequest, FetchResponse};

/// What: Spawn the background worker that turns fetch requests into responses.
///
/// Inputs:
/// - `fetch_rx`: Requests issued by the event loop
/// - `response_tx`: Channel for outcomes, tagged with the request id
/// - `client`: HTTP client bound to the configured endpoint
/// - `debounce`: Quiet period that collapses a burst of requests into the last one
///
/// Details:
/// - Each surviving request is fetched on its own task, so a slow response never
///   blocks newer requests; ordering is resolved by id on the receiving side.
/// - The worker exits when every request sender has been dropped.
pub fn spawn_search_worker(
    mut fetch_rx: mpsc::UnboundedReceiver<FetchRequest>,
    response_tx: mpsc::UnboundedSender<FetchResponse>,
    client: SearchClient,
    debounce: Duration,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = fetch_rx.recv().await else {
                break;
            };
            if !debounce.is_zero() {
                loop {
                    select! {
                        Some(newer) = fetch_rx.recv() => { latest = newer; }
                        () = sleep(debounce) => { break; }
                    }
                }
            }
            tracing::debug!(id = latest.id, page = latest.page, "[Worker] fetching");
            let tx = response_tx.clone();
            let client = client.clone();
            tokio::spawn(async move {
                let outcome = client
                    .fetch_or_fallback(&latest.filters, latest.page, latest.size)
                    .await;
                let _ = tx.send(FetchResponse {
                    id: latest.id,
                    outcome,
                });
            });
        }
        tracing::debug!("[Worker] request channel closed; search worker exiting");
    });
}
