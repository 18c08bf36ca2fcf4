use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::sources::SearchClient;
use crate::state::{FetchRequest, FetchResponse};

use super::workers::search::spawn_search_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The event loop keeps the receivers; the terminal thread and the search
///   worker hold the matching senders.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the terminal reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the search worker.
    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Responses from the search worker.
    pub response_rx: mpsc::UnboundedReceiver<FetchResponse>,
}

impl Channels {
    /// What: Create all channels and spawn the search worker.
    ///
    /// Inputs:
    /// - `client`: HTTP client handed to the worker
    /// - `debounce`: Worker debounce window
    pub fn new(client: SearchClient, debounce: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        spawn_search_worker(fetch_rx, response_tx, client, debounce);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_tx,
            response_rx,
        }
    }
}
