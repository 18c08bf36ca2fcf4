use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{go_to_page, total_pages};
use crate::state::{AppState, FetchRequest, Modal};

/// What: Handle a key while the results area has focus.
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - Left/Right (`h`/`l`, PageUp/PageDown) change page; Home/End jump to the first/last page.
/// - `v` switches between cards and list; Enter opens the selected dataset.
pub fn handle_results_key(
    ke: &KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            go_to_page(app, i64::from(app.page) - 1, fetch_tx);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            go_to_page(app, i64::from(app.page) + 1, fetch_tx);
        }
        KeyCode::Home => {
            go_to_page(app, 1, fetch_tx);
        }
        KeyCode::End => {
            let last = total_pages(app.total, app.page_size);
            go_to_page(app, i64::from(last), fetch_tx);
        }
        KeyCode::Char('v') => {
            app.view = app.view.toggled();
            tracing::debug!(view = app.view.as_config_key(), "[Events] view toggled");
        }
        KeyCode::Enter => {
            if let Some(ds) = app.selected_dataset() {
                app.modal = Modal::DatasetDetails {
                    dataset: Box::new(ds.clone()),
                    scroll: 0,
                };
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Dataset, ViewMode};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    /// What: Paging keys clamp to the reported page range and fetch only on change.
    ///
    /// Inputs:
    /// - 47 results at 9 per page (6 pages), starting on page 1.
    ///
    /// Output:
    /// - Left on page 1 is a no-op; End jumps to 6; Right on 6 is a no-op; Home returns to 1.
    fn paging_keys_clamp() {
        let mut app = AppState {
            total: 47,
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_results_key(&key(KeyCode::Left), &mut app, &tx);
        assert_eq!(app.page, 1);
        handle_results_key(&key(KeyCode::End), &mut app, &tx);
        assert_eq!(app.page, 6);
        handle_results_key(&key(KeyCode::Char('l')), &mut app, &tx);
        assert_eq!(app.page, 6);
        handle_results_key(&key(KeyCode::PageUp), &mut app, &tx);
        assert_eq!(app.page, 5);
        handle_results_key(&key(KeyCode::Home), &mut app, &tx);
        assert_eq!(app.page, 1);
        let pages: Vec<u32> = std::iter::from_fn(|| rx.try_recv().ok()).map(|r| r.page).collect();
        assert_eq!(pages, vec![6, 5, 1]);
    }

    #[test]
    /// What: `v` flips the view and Enter opens the selected dataset.
    fn view_toggle_and_details() {
        let mut app = AppState {
            datasets: vec![
                Dataset {
                    id: "a".into(),
                    ..Dataset::default()
                },
                Dataset {
                    id: "b".into(),
                    ..Dataset::default()
                },
            ],
            ..AppState::default()
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_results_key(&key(KeyCode::Char('v')), &mut app, &tx);
        assert_eq!(app.view, ViewMode::List);
        handle_results_key(&key(KeyCode::Char('j')), &mut app, &tx);
        handle_results_key(&key(KeyCode::Enter), &mut app, &tx);
        match &app.modal {
            Modal::DatasetDetails { dataset, scroll } => {
                assert_eq!(dataset.id, "b");
                assert_eq!(*scroll, 0);
            }
            other => panic!("expected details modal, got {other:?}"),
        }
    }
}
