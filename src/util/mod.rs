//! Small display helpers shared by the UI and the one-shot printer.

pub mod config;

use chrono::{DateTime, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Shorten `s` so it fits in `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max`: Available width in columns.
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…`.
///
/// Details:
/// - Uses display width, so wide CJK glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Render an API timestamp as a calendar date.
///
/// Inputs:
/// - `raw`: RFC 3339 timestamp, a bare `YYYY-MM-DD` date, or anything else.
///
/// Output:
/// - `YYYY-MM-DD` when recognized; otherwise the input trimmed and unchanged.
#[must_use]
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Some(prefix) = raw.get(..10)
        && let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
    {
        return d.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// What: Format a count with thousands separators (`12345` → `12,345`).
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1 dataset`, `0 datasets`, `12,345 datasets`.
#[must_use]
pub fn dataset_count(n: u64) -> String {
    let noun = if n == 1 { "dataset" } else { "datasets" };
    format!("{} {noun}", group_thousands(n))
}
