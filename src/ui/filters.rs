use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::logic::{FacetSection, option_row_count, sidebar_sections};
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};
use crate::util::{group_thousands, truncate_to_width};

/// What: Turn facet sections into sidebar rows.
///
/// Output:
/// - The rows plus the row index of each selectable option, in cursor order.
fn sidebar_rows<'a>(sections: &[FacetSection], th: &Theme, width: usize) -> (Vec<ListItem<'a>>, Vec<usize>) {
    let mut rows = Vec::new();
    let mut option_rows = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            rows.push(ListItem::new(Line::raw("")));
        }
        rows.push(ListItem::new(Line::from(vec![
            Span::styled(
                section.facet.title(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", section.available), Style::default().fg(th.overlay1)),
        ])));
        let single = section.facet.is_single_select();
        for opt in &section.options {
            let marker = match (single, opt.checked) {
                (true, true) => "(•) ",
                (true, false) => "( ) ",
                (false, true) => "[x] ",
                (false, false) => "[ ] ",
            };
            let count = opt.count.map(|c| format!(" ({})", group_thousands(c)));
            let room = width.saturating_sub(marker.chars().count() + count.as_ref().map_or(0, String::len));
            let mut spans = vec![
                Span::styled(
                    marker,
                    Style::default().fg(if opt.checked { th.green } else { th.overlay1 }),
                ),
                Span::styled(
                    truncate_to_width(&opt.label, room),
                    Style::default().fg(if opt.checked { th.text } else { th.subtext0 }),
                ),
            ];
            if let Some(c) = count {
                spans.push(Span::styled(c, Style::default().fg(th.overlay2)));
            }
            option_rows.push(rows.len());
            rows.push(ListItem::new(Line::from(spans)));
        }
    }
    (rows, option_rows)
}

/// What: Draw the filter sidebar.
///
/// Details:
/// - Options and checked markers are recomputed from the filters and latest aggregations
///   on every frame.
/// - The highlighted row follows `facet_cursor` and is only emphasized while focused.
pub fn render_filters(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Filters;
    let sections = sidebar_sections(&app.filters, &app.aggregations);
    let inner_width = usize::from(area.width.saturating_sub(4));
    let (rows, option_rows) = sidebar_rows(&sections, &th, inner_width);
    let cursor = app
        .facet_cursor
        .min(option_row_count(&sections).saturating_sub(1));
    let mut state = ListState::default().with_selected(option_rows.get(cursor).copied());

    let highlight = if focused {
        Style::default().fg(th.crust).bg(th.lavender)
    } else {
        Style::default()
    };
    let list = List::new(rows)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    if focused { "Filters (focused)" } else { "Filters" },
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        )
        .highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut state);
}
