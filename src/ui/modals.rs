use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Dataset, Modal};
use crate::theme::{Theme, theme};
use crate::util::{display_date, group_thousands};

/// Key binding reference shown by the help modal.
const HELP_ROWS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "cycle focus: search, filters, results"),
    ("/", "jump to the search box"),
    ("type, Backspace, Delete", "edit the search query"),
    ("Ctrl+U", "clear the search query"),
    ("↑/↓ or j/k", "move in filters or results"),
    ("Space / Enter", "toggle the highlighted filter option"),
    ("←/→, h/l, PgUp/PgDn", "previous / next page"),
    ("Home / End", "first / last page"),
    ("v", "switch between cards and list"),
    ("Enter", "open dataset details"),
    ("Ctrl+X", "clear all filters"),
    ("Esc", "close this window"),
    ("q / Ctrl+C", "quit"),
];

/// Rectangle of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Bordered modal frame with a title.
fn modal_block<'a>(title: &'a str, th: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle))
}

/// What: Render the active modal overlay, if any.
///
/// Details:
/// - Clears the area behind the modal so underlying panes do not bleed through.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, area, &th),
        Modal::DatasetDetails { dataset, scroll } => render_details(f, dataset, *scroll, area, &th),
    }
}

fn render_help(f: &mut Frame, area: Rect, th: &Theme) {
    let rect = centered_rect(70, 70, area);
    let lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<26}"), Style::default().fg(th.sapphire)),
                Span::styled(*what, Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(modal_block(" Help ", th)),
        rect,
    );
}

/// What: Lines describing every field of `ds` worth showing.
#[must_use]
pub fn detail_lines(ds: &Dataset, th: &Theme) -> Vec<Line<'static>> {
    let label = |s: &'static str| Span::styled(format!("{s:<14}"), Style::default().fg(th.overlay2));
    let value = |s: String| Span::styled(s, Style::default().fg(th.text));
    let mut lines = vec![
        Line::from(Span::styled(
            ds.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    if !ds.description.is_empty() {
        lines.push(Line::from(Span::styled(ds.description.clone(), Style::default().fg(th.subtext0))));
        lines.push(Line::raw(""));
    }
    if let Some(org) = &ds.organization {
        lines.push(Line::from(vec![label("Organisation"), value(org.name.clone())]));
    }
    if let Some(name) = ds.publisher_name() {
        lines.push(Line::from(vec![label("Publisher"), value(name.to_string())]));
    }
    for (name, list) in [("Sectors", &ds.sectors), ("Tags", &ds.tags), ("Formats", &ds.formats)] {
        if !list.is_empty() {
            lines.push(Line::from(vec![label(name), value(list.join(", "))]));
        }
    }
    if !ds.created.is_empty() {
        lines.push(Line::from(vec![label("Created"), value(display_date(&ds.created))]));
    }
    if !ds.modified.is_empty() {
        lines.push(Line::from(vec![label("Updated"), value(display_date(&ds.modified))]));
    }
    lines.push(Line::from(vec![label("Downloads"), value(group_thousands(ds.download_count))]));
    if !ds.status.is_empty() {
        lines.push(Line::from(vec![label("Status"), value(ds.status.clone())]));
    }
    if !ds.metadata.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Metadata",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for item in &ds.metadata {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", item.metadata_item.label), Style::default().fg(th.overlay2)),
                value(item.value.clone()),
            ]));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(format!("id: {}", ds.id), Style::default().fg(th.overlay1))));
    lines
}

fn render_details(f: &mut Frame, ds: &Dataset, scroll: u16, area: Rect, th: &Theme) {
    let rect = centered_rect(80, 80, area);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(detail_lines(ds, th))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(modal_block(" Dataset ", th)),
        rect,
    );
}
