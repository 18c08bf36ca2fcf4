use ratatui::style::Color;

use crate::theme::types::Theme;

/// What: Normalize a config key for matching.
///
/// Details:
/// - Lowercases and maps `.`, `-` and spaces to `_`, so `Page-Size` and `page_size` match.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Strip a trailing ` # comment` from a settings value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments and
///   `//` inside URLs survive.
pub(crate) fn strip_value_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = (1..bytes.len())
        .find(|&i| bytes[i] == b'#' && bytes[i - 1].is_ascii_whitespace())
        .unwrap_or(bytes.len());
    s[..cut].trim()
}

/// Interpret common truthy/falsy spellings; `None` for anything else.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_value_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Map a normalized theme key (descriptive or short form) to its canonical field name.
///
/// Output:
/// - `Some(canonical)` for known keys; `None` otherwise.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    Some(match norm {
        "base" | "background_base" => "base",
        "mantle" | "background_mantle" => "mantle",
        "crust" | "background_crust" => "crust",
        "surface1" | "surface_level1" => "surface1",
        "surface2" | "surface_level2" => "surface2",
        "overlay1" | "overlay_primary" | "border_primary" => "overlay1",
        "overlay2" | "overlay_secondary" | "border_secondary" => "overlay2",
        "text" | "text_primary" => "text",
        "subtext0" | "text_secondary" => "subtext0",
        "subtext1" | "text_tertiary" => "subtext1",
        "sapphire" | "accent_interactive" => "sapphire",
        "mauve" | "accent_heading" => "mauve",
        "green" | "semantic_success" => "green",
        "yellow" | "semantic_warning" => "yellow",
        "red" | "semantic_error" => "red",
        "lavender" | "accent_emphasis" => "lavender",
        _ => return None,
    })
}

/// What: Apply a single color override onto `theme`.
///
/// Output:
/// - `Ok(())` when applied; `Err` with a readable message when the key or value is unknown.
pub(crate) fn apply_theme_override(
    theme: &mut Theme,
    key: &str,
    value: &str,
) -> Result<(), String> {
    let norm = normalize_key(key);
    let Some(canon) = canonical_for_key(&norm) else {
        return Err(format!("unknown theme key '{key}'"));
    };
    let Some(color) = parse_color_value(value) else {
        return Err(format!("invalid color for '{key}': '{value}'"));
    };
    let slot = match canon {
        "base" => &mut theme.base,
        "mantle" => &mut theme.mantle,
        "crust" => &mut theme.crust,
        "surface1" => &mut theme.surface1,
        "surface2" => &mut theme.surface2,
        "overlay1" => &mut theme.overlay1,
        "overlay2" => &mut theme.overlay2,
        "text" => &mut theme.text,
        "subtext0" => &mut theme.subtext0,
        "subtext1" => &mut theme.subtext1,
        "sapphire" => &mut theme.sapphire,
        "mauve" => &mut theme.mauve,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        _ => &mut theme.lavender,
    };
    *slot = color;
    Ok(())
}
