use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Prompt drawn before the query text.
const PROMPT: &str = "> ";

/// What: Draw the search box and, when focused, place the terminal cursor at the caret.
///
/// Details:
/// - The caret column uses display width so wide glyphs line up.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let query = app.filters.query.as_str();
    let body = if query.is_empty() && !focused {
        Span::styled("search datasets (Tab to focus)", Style::default().fg(th.overlay1))
    } else {
        Span::styled(query, Style::default().fg(if focused { th.text } else { th.subtext0 }))
    };
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(if focused { th.sapphire } else { th.overlay1 })),
        body,
    ]);
    let border = if focused { th.mauve } else { th.surface1 };
    let block = Block::default()
        .title(Span::styled(
            if focused { "Search (focused)" } else { "Search" },
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(line).block(block).style(Style::default().bg(th.base)), area);

    if focused {
        let before: String = query.chars().take(app.search_caret).collect();
        let offset = u16::try_from(PROMPT.width() + before.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(offset).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    /// What: Focused search shows the query and puts the cursor after the caret.
    fn focused_search_places_cursor() {
        let app = AppState {
            filters: crate::state::FilterState::default().with_query("water"),
            focus: Focus::Search,
            search_caret: 2,
            ..AppState::default()
        };
        let mut term = Terminal::new(TestBackend::new(40, 3)).expect("terminal");
        term.draw(|f| render_search(f, &app, f.area())).expect("draw");
        let lines = crate::ui::buffer_lines(term.backend().buffer());
        assert!(lines[1].contains("> water"));
        assert!(lines[0].contains("Search (focused)"));
        let pos = term.get_cursor_position().expect("cursor");
        assert_eq!(pos, Position::new(1 + 2 + 2, 1));
    }
}
