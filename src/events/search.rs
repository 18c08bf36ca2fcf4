use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::set_query_text;
use crate::state::{AppState, FetchRequest, Focus};

use super::utils::{byte_index_for_char, char_count};

/// What: Commit an edited query and place the caret.
fn commit_query(app: &mut AppState, text: &str, caret: usize, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    set_query_text(app, text, fetch_tx);
    app.search_caret = caret.min(char_count(&app.filters.query));
}

/// What: Handle a key while the search box has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel for fetch requests
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - Printable characters insert at the caret; every edit issues a fetch with page reset to 1.
/// - `Ctrl+U` clears the query; `Enter`/`Esc` hand focus to the results.
pub fn handle_search_key(
    ke: &KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let query = app.filters.query.clone();
    let caret = app.search_caret.min(char_count(&query));
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            if !query.is_empty() {
                commit_query(app, "", 0, fetch_tx);
            }
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut next = query;
            next.insert(byte_index_for_char(&next, caret), ch);
            commit_query(app, &next, caret + 1, fetch_tx);
        }
        KeyCode::Backspace => {
            if caret > 0 {
                let mut next = query;
                next.remove(byte_index_for_char(&next, caret - 1));
                commit_query(app, &next, caret - 1, fetch_tx);
            }
        }
        KeyCode::Delete => {
            if caret < char_count(&query) {
                let mut next = query;
                next.remove(byte_index_for_char(&next, caret));
                commit_query(app, &next, caret, fetch_tx);
            }
        }
        KeyCode::Left => app.search_caret = caret.saturating_sub(1),
        KeyCode::Right => app.search_caret = (caret + 1).min(char_count(&query)),
        KeyCode::Home => app.search_caret = 0,
        KeyCode::End => app.search_caret = char_count(&query),
        KeyCode::Enter | KeyCode::Esc => app.focus = Focus::Results,
        _ => return false,
    }
    true
}
