//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests drive state through the public handlers and check what a user
//! would see, without a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use civicdata::app::handle_fetch_response;
use civicdata::sources::{FetchError, FetchOutcome, sample_page};
use civicdata::state::{AppState, FetchResponse, Focus, ViewMode};
use civicdata::ui::ui;

fn render(app: &mut AppState, w: u16, h: u16) -> String {
    let mut term = Terminal::new(TestBackend::new(w, h)).expect("terminal");
    term.draw(|f| ui(f, app)).expect("draw");
    let buf = term.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
/// What: After a failed request with sample data, the screen shows the sample and the failure.
///
/// Inputs:
/// - Fallback outcome wrapping a 503.
///
/// Output:
/// - Sample dataset title, warning naming the status, mock aggregation counts in the sidebar,
///   and no pager (a single result).
fn fallback_screen_shows_sample_and_reason() {
    let mut app = AppState {
        latest_request_id: 1,
        next_request_id: 2,
        loading: true,
        ..AppState::default()
    };
    handle_fetch_response(
        &mut app,
        FetchResponse {
            id: 1,
            outcome: FetchOutcome::Fallback {
                page: sample_page(),
                error: FetchError::Status { status: 503 },
            },
        },
    );
    let text = render(&mut app, 150, 40);
    assert!(text.contains("Sample Dataset - Assam Budget Data"));
    assert!(text.contains("status 503"));
    assert!(text.contains("[ ] Public Finance (12)"));
    assert!(text.contains("Page 1 of 1"));
    assert!(!text.contains("Next ›"));
}

#[test]
/// What: List view and a focused search box render together.
fn list_view_with_focused_search() {
    let page = sample_page();
    let mut app = AppState {
        datasets: page.results,
        total: page.total,
        view: ViewMode::List,
        focus: Focus::Search,
        ..AppState::default()
    };
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Search (focused)"));
    assert!(text.contains("> Sample Dataset"));
    assert!(text.contains("View: List"));
}
