use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the thread that forwards terminal events to the event loop.
///
/// Inputs:
/// - `headless`: When `true` no thread is started
/// - `event_tx`: Destination for terminal events
/// - `cancelled`: Flag checked between polls; set it to stop the thread
///
/// Details:
/// - Polls with a 50 ms timeout so cancellation is noticed promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    // transient read errors are skipped
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
