use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::logic::total_pages;
use crate::state::{AppState, ViewMode};
use crate::theme::theme;
use crate::util::dataset_count;

/// What: `Page X of Y` caption, shown only when the server reported matches.
#[must_use]
pub fn page_caption(app: &AppState) -> Option<String> {
    if app.total == 0 {
        return None;
    }
    let pages = total_pages(app.total, app.page_size).max(1);
    Some(format!("Page {} of {pages}", app.page.min(pages)))
}

/// Draw the one-line header: app name, result count, page caption, view and active filters.
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans = vec![
        Span::styled(
            " civicdata ",
            Style::default().fg(th.crust).bg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            dataset_count(app.total),
            Style::default().fg(th.text),
        ),
    ];
    if let Some(caption) = page_caption(app) {
        spans.push(Span::styled("  •  ", Style::default().fg(th.overlay1)));
        spans.push(Span::styled(caption, Style::default().fg(th.sapphire)));
    }
    let view = match app.view {
        ViewMode::Cards => "Cards",
        ViewMode::List => "List",
    };
    spans.push(Span::styled("  •  ", Style::default().fg(th.overlay1)));
    spans.push(Span::styled(format!("View: {view}"), Style::default().fg(th.subtext0)));
    let active = app.filters.active_count();
    if active > 0 {
        spans.push(Span::styled("  •  ", Style::default().fg(th.overlay1)));
        spans.push(Span::styled(
            format!("{active} active filter{}", if active == 1 { "" } else { "s" }),
            Style::default().fg(th.yellow),
        ));
    }
    if app.loading {
        spans.push(Span::styled("  •  loading…", Style::default().fg(th.overlay2)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Facet;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    /// What: The page caption appears only when there are results.
    fn page_caption_requires_total() {
        let mut app = AppState::default();
        assert_eq!(page_caption(&app), None);
        app.total = 9;
        assert_eq!(page_caption(&app).as_deref(), Some("Page 1 of 1"));
        app.total = 47;
        app.page = 6;
        assert_eq!(page_caption(&app).as_deref(), Some("Page 6 of 6"));
    }

    #[test]
    /// What: Header shows count, view and the number of active filters.
    fn header_renders_summary() {
        let mut app = AppState {
            total: 1234,
            view: ViewMode::List,
            filters: crate::state::FilterState::default()
                .with_query("roads")
                .with_option(Facet::Tags, "Budget", true),
            ..AppState::default()
        };
        app.page = 1;
        let mut term = Terminal::new(TestBackend::new(120, 1)).expect("terminal");
        term.draw(|f| render_header(f, &app, f.area())).expect("draw");
        let line = crate::ui::buffer_lines(term.backend().buffer()).join("");
        assert!(line.contains("1,234 datasets"));
        assert!(line.contains("Page 1 of 138"));
        assert!(line.contains("View: List"));
        assert!(line.contains("2 active filters"));
    }
}
