use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{option_at, option_row_count, sidebar_sections, toggle_facet_option};
use crate::state::{AppState, FetchRequest};

/// What: Handle a key while the filter sidebar has focus.
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - The cursor runs across all sections in display order.
/// - `Space`/`Enter` toggles the option under the cursor and issues a fetch.
pub fn handle_filters_key(
    ke: &KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let sections = sidebar_sections(&app.filters, &app.aggregations);
    let last = option_row_count(&sections).saturating_sub(1);
    let cursor = app.facet_cursor.min(last);
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.facet_cursor = cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => app.facet_cursor = (cursor + 1).min(last),
        KeyCode::Home => app.facet_cursor = 0,
        KeyCode::End => app.facet_cursor = last,
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some((facet, option)) = option_at(&sections, cursor) {
                let label = option.label.clone();
                app.facet_cursor = cursor;
                toggle_facet_option(app, facet, &label, fetch_tx);
            }
        }
        _ => return false,
    }
    true
}
