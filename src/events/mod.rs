//! Keyboard handling for the civicdata TUI.
//!
//! `handle_event` resolves modals and global keys, then delegates to the
//! handler for the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::clear_all_filters;
use crate::state::{AppState, FetchRequest, Focus, Modal};

mod filters;
mod results;
mod search;
mod utils;

pub use filters::handle_filters_key;
pub use results::handle_results_key;
pub use search::handle_search_key;

/// Lines scrolled by PageUp/PageDown in the details modal.
const DETAILS_PAGE: u16 = 10;

/// What: Handle a key while a modal is open.
///
/// Details:
/// - Every key is swallowed so nothing leaks to the pane underneath.
fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) {
    match &mut app.modal {
        Modal::None => {}
        Modal::Help => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')) {
                app.modal = Modal::None;
            }
        }
        Modal::DatasetDetails { scroll, .. } => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.modal = Modal::None,
            KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(DETAILS_PAGE),
            KeyCode::PageDown => *scroll = scroll.saturating_add(DETAILS_PAGE),
            KeyCode::Home => *scroll = 0,
            _ => {}
        },
    }
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c')) {
        return true;
    }
    if app.modal != Modal::None {
        handle_modal_key(ke, app);
        return false;
    }
    match ke.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return false;
        }
        KeyCode::Char('x') if ctrl => {
            tracing::debug!("[Events] clearing all filters");
            clear_all_filters(app, fetch_tx);
            app.search_caret = 0;
            return false;
        }
        _ => {}
    }
    if app.focus == Focus::Search {
        handle_search_key(ke, app, fetch_tx);
        return false;
    }
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Filters => handle_filters_key(ke, app, fetch_tx),
        Focus::Results => handle_results_key(ke, app, fetch_tx),
        Focus::Search => false,
    };
    false
}
