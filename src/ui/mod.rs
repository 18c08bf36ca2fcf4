//! Rendering for the civicdata TUI.
//!
//! Layout, top to bottom: header, search box, then the filter sidebar beside
//! the results and pager, and a one-line key hint footer. Modals draw last.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::logic::pager_view;
use crate::state::{AppState, Focus};
use crate::theme::theme;

mod filters;
mod header;
mod modals;
mod pager;
mod results;
mod search;

/// Width of the filter sidebar in columns.
const SIDEBAR_WIDTH: u16 = 34;

/// What: Draw the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `list_state` is updated by the list view
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let [header_area, search_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(f, app, header_area);
    search::render_search(f, app, search_area);

    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)]).areas(body_area);
    filters::render_filters(f, app, sidebar_area);

    // the previous total is stale until the response lands
    let pager = if app.loading {
        None
    } else {
        pager_view(app.page, app.total, app.page_size)
    };
    match pager {
        Some(view) => {
            let [results_area, pager_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(main_area);
            results::render_results(f, app, results_area);
            pager::render_pager(f, &view, pager_area);
        }
        None => results::render_results(f, app, main_area),
    }

    render_footer(f, app, footer_area);
    modals::render_modals(f, app, area);
}

/// Key hints for the focused pane.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let hints = match app.focus {
        Focus::Search => "type to search  ←/→ caret  Ctrl+U clear  Enter results  Tab next pane",
        Focus::Filters => "↑/↓ move  Space toggle  Ctrl+X clear all  Tab next pane  ? help  q quit",
        Focus::Results => "↑/↓ select  ←/→ page  v view  Enter details  Ctrl+X clear all  ? help  q quit",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(th.overlay1))))
            .style(Style::default().bg(th.mantle)),
        area,
    );
}

#[cfg(test)]
/// What: Flatten a test buffer into one string per row.
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::sources::sample_page;
    use crate::state::ResultsStatus;

    #[test]
    /// What: Full-screen render shows header, sidebar, results and pager together.
    ///
    /// Inputs:
    /// - Sample page with `total` raised to 47 on page 2 at 9 per page.
    ///
    /// Output:
    /// - "Page 2 of 6", a sidebar heading, the dataset title and the pager window are all on screen.
    fn full_screen_layout() {
        let page = sample_page();
        let mut app = AppState {
            datasets: page.results,
            aggregations: page.aggregations,
            total: 47,
            page: 2,
            status: ResultsStatus::Ready,
            ..AppState::default()
        };
        let mut term = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_lines(term.backend().buffer()).join("\n");
        assert!(text.contains("Page 2 of 6"));
        assert!(text.contains("Sectors"));
        assert!(text.contains("Assam"));
        assert!(text.contains("Next"));
    }

    #[test]
    /// What: The pager is hidden while a request is in flight.
    ///
    /// Inputs:
    /// - 47 results from the previous response, page 2, `loading` set.
    ///
    /// Output:
    /// - No pager arrows on screen; they return once loading clears.
    fn pager_hidden_while_loading() {
        let mut app = AppState {
            total: 47,
            page: 2,
            loading: true,
            status: ResultsStatus::Loading,
            ..AppState::default()
        };
        let mut term = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_lines(term.backend().buffer()).join("\n");
        assert!(!text.contains("Next ›"));
        assert!(!text.contains("‹ Prev"));

        app.loading = false;
        app.status = ResultsStatus::Ready;
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_lines(term.backend().buffer()).join("\n");
        assert!(text.contains("Next ›"));
    }
}
