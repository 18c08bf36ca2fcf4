use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::logic::PagerView;
use crate::theme::{Theme, theme};

/// What: Build the pager line: previous, the page window, next.
///
/// Details:
/// - Disabled arrows are dimmed; the current page is bracketed and bold.
#[must_use]
pub fn pager_line(view: &PagerView, th: &Theme) -> Line<'static> {
    let arrow = |enabled: bool| {
        Style::default().fg(if enabled { th.sapphire } else { th.surface2 })
    };
    let mut spans = vec![Span::styled("‹ Prev", arrow(view.prev_enabled)), Span::raw("  ")];
    for &n in &view.window {
        if n == view.current {
            spans.push(Span::styled(
                format!("[{n}]"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {n} "), Style::default().fg(th.subtext0)));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled("Next ›", arrow(view.next_enabled)));
    Line::from(spans)
}

/// Draw the pager centered in `area`.
pub fn render_pager(f: &mut Frame, view: &PagerView, area: Rect) {
    let th = theme();
    f.render_widget(
        Paragraph::new(pager_line(view, &th)).alignment(Alignment::Center),
        area,
    );
}
