use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::handle_fetch_response;

/// What: Draw, then wait for the next terminal event or fetch response, until quit.
///
/// Inputs:
/// - `app`: Application state owned by the loop
/// - `channels`: Runtime channels
/// - `terminal`: Render target; `None` in headless mode
///
/// Details:
/// - Returns when a key handler requests exit or every channel has closed.
pub async fn main_loop(
    app: &mut AppState,
    channels: &mut Channels,
    terminal: &mut Option<Terminal<CrosstermBackend<Stdout>>>,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, app, &channels.fetch_tx) {
                    break;
                }
            }
            Some(resp) = channels.response_rx.recv() => {
                handle_fetch_response(app, resp);
            }
            else => break,
        }
    }
}
