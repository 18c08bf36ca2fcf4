use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Dataset, Focus, ResultsStatus, ViewMode};
use crate::theme::{Theme, theme};
use crate::util::{group_thousands, truncate_to_width};

/// Cards per row in the card view.
pub const CARD_COLUMNS: usize = 3;
/// Card height in rows, borders included.
const CARD_HEIGHT: u16 = 7;

/// What: Message the results area shows for `status`, if any.
///
/// Output:
/// - Text and color; `None` when datasets speak for themselves.
#[must_use]
pub fn status_message(status: &ResultsStatus, th: &Theme) -> Option<(String, Color)> {
    match status {
        ResultsStatus::Idle | ResultsStatus::Ready => None,
        ResultsStatus::Loading => Some(("Loading datasets…".to_string(), th.overlay2)),
        ResultsStatus::Empty => Some((
            "No datasets match the current filters.".to_string(),
            th.subtext0,
        )),
        ResultsStatus::SampleData { reason } => Some((
            format!("Showing sample data, the search request failed: {reason}"),
            th.yellow,
        )),
        ResultsStatus::Failed { reason } => {
            Some((format!("Could not load datasets: {reason}"), th.red))
        }
    }
}

/// What: Draw the results pane in the current view.
///
/// Details:
/// - While loading, a single loading line replaces the results.
/// - Sample data is drawn below a warning line naming the failure.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            format!(
                "Datasets ({}){}",
                app.datasets.len(),
                if focused { " (focused)" } else { "" }
            ),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = status_message(&app.status, &th);
    if app.loading || app.datasets.is_empty() {
        let (text, color) = message.unwrap_or_else(|| ("No datasets loaded.".to_string(), th.overlay1));
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let body = match message {
        Some((text, color)) => {
            let [msg_area, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    truncate_to_width(&text, usize::from(msg_area.width)),
                    Style::default().fg(color),
                ))),
                msg_area,
            );
            rest
        }
        None => inner,
    };

    match app.view {
        ViewMode::Cards => render_cards(f, app, body, &th),
        ViewMode::List => render_list(f, app, body, &th),
    }
}

/// Organisation name, or the publisher for individual uploads.
fn owner_name(ds: &Dataset) -> &str {
    ds.organization
        .as_ref()
        .map(|o| o.name.as_str())
        .filter(|n| !n.is_empty())
        .or_else(|| ds.publisher_name())
        .unwrap_or("Unknown publisher")
}

/// What: Draw datasets as a grid of cards, scrolled so the selected row is visible.
fn render_cards(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / CARD_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let rows = app.datasets.chunks(CARD_COLUMNS).enumerate().skip(first_row).take(visible_rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    for ((row_idx, chunk), row_area) in rows.zip(row_areas.iter()) {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, 3); CARD_COLUMNS]).split(*row_area);
        for (col_idx, (ds, card_area)) in chunk.iter().zip(cols.iter()).enumerate() {
            let selected = row_idx * CARD_COLUMNS + col_idx == app.selected;
            render_card(f, ds, *card_area, selected, th);
        }
    }
}

/// Draw one dataset card.
fn render_card(f: &mut Frame, ds: &Dataset, area: Rect, selected: bool, th: &Theme) {
    let width = usize::from(area.width.saturating_sub(2));
    let formats = if ds.formats.is_empty() {
        "no files".to_string()
    } else {
        ds.formats.join(" · ")
    };
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&ds.title, width),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(owner_name(ds), width),
            Style::default().fg(th.sapphire),
        )),
        Line::from(Span::styled(
            truncate_to_width(&ds.description, width.saturating_mul(2)),
            Style::default().fg(th.subtext0),
        )),
        Line::from(vec![
            Span::styled(formats, Style::default().fg(th.green)),
            Span::styled(
                format!("  ↓ {}", group_thousands(ds.download_count)),
                Style::default().fg(th.overlay2),
            ),
        ]),
    ];
    let border = if selected { th.lavender } else { th.surface2 };
    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(card, area);
}

/// Draw datasets as a selectable list of title and description.
fn render_list(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .datasets
        .iter()
        .map(|ds| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_to_width(&ds.title, width),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&ds.description, width),
                    Style::default().fg(th.overlay2),
                )),
            ])
        })
        .collect();
    app.list_state.select(Some(app.selected.min(app.datasets.len().saturating_sub(1))));
    let list = List::new(items)
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
