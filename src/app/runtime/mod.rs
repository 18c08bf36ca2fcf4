use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::Duration;

use crate::logic::send_fetch;
use crate::sources::SearchClient;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
pub mod handlers;
mod init;
pub mod workers;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::main_loop;
pub use init::{StartupOptions, initialize_app_state};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the civicdata TUI end-to-end: build the client, set up the terminal,
/// spawn the search worker and event reader, drive the event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (file plus command-line overrides)
/// - `startup`: Filters, page and view for the first request
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` for an unusable endpoint URL or terminal errors.
///
/// Details:
/// - `CIVICDATA_TEST_HEADLESS=1` skips terminal setup and the event reader thread.
/// - The first fetch is issued before the loop starts.
pub async fn run(settings: Settings, startup: StartupOptions) -> Result<()> {
    let headless = std::env::var("CIVICDATA_TEST_HEADLESS").ok().as_deref() == Some("1");
    let client = SearchClient::from_settings(&settings)?;
    tracing::info!(
        endpoint = %client.base_url(),
        sample_data = client.mock_fallback(),
        headless,
        "[Runtime] starting"
    );

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(&settings, startup);
    let mut channels = Channels::new(client, Duration::from_millis(settings.search_debounce_ms));
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    send_fetch(&mut app, &channels.fetch_tx);
    main_loop(&mut app, &mut channels, &mut terminal).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("[Runtime] exited");
    Ok(())
}
