use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::theme::parsing::{apply_theme_override, normalize_key};
use crate::theme::paths::{config_dir, resolve_settings_config_path};
use crate::theme::types::{Settings, Theme};

/// Content written to `settings.conf` on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# civicdata settings\n\
#\n\
# Format: key = value. Lines starting with # are comments.\n\
#\n\
# Search endpoint; the query string is appended to it.\n\
api_base_url = https://api.datakeep.civicdays.in/api/search/dataset/\n\
#\n\
# Datasets per page (1-100).\n\
page_size = 9\n\
#\n\
# Sort key and direction (asc or desc).\n\
sort = recent\n\
order = desc\n\
#\n\
# Startup view: card or list.\n\
default_view = card\n\
#\n\
# Network timeouts in seconds.\n\
request_timeout_secs = 15\n\
connect_timeout_secs = 10\n\
#\n\
# Quiet period before typing triggers a search, in milliseconds.\n\
search_debounce_ms = 250\n\
#\n\
# Show bundled sample data when the search request fails.\n\
mock_fallback = true\n";

/// Content written to `theme.conf` on first run.
pub const THEME_SKELETON_CONTENT: &str = "# civicdata theme\n\
#\n\
# Format: key = value, colors as #RRGGBB or R,G,B.\n\
# Any key left out keeps the built-in Catppuccin Mocha color.\n\
#\n\
# background_base = #1e1e2e\n\
# background_mantle = #181825\n\
# background_crust = #11111b\n\
# surface_level1 = #45475a\n\
# surface_level2 = #585b70\n\
# overlay_primary = #7f849c\n\
# overlay_secondary = #9399b2\n\
# text_primary = #cdd6f4\n\
# text_secondary = #a6adc8\n\
# text_tertiary = #bac2de\n\
# accent_interactive = #74c7ec\n\
# accent_heading = #cba6f7\n\
# accent_emphasis = #b4befe\n\
# semantic_success = #a6e3a1\n\
# semantic_warning = #f9e2af\n\
# semantic_error = #f38ba8\n";

/// What: Render the `key = value` line for a settings key from `prefs`.
fn settings_line(key: &str, prefs: &Settings) -> Option<String> {
    let value = match key {
        "api_base_url" => prefs.api_base_url.clone(),
        "page_size" => prefs.page_size.to_string(),
        "sort" => prefs.sort.clone(),
        "order" => prefs.order.clone(),
        "default_view" => prefs.default_view.as_config_key().to_string(),
        "request_timeout_secs" => prefs.request_timeout_secs.to_string(),
        "connect_timeout_secs" => prefs.connect_timeout_secs.to_string(),
        "search_debounce_ms" => prefs.search_debounce_ms.to_string(),
        "mock_fallback" => prefs.mock_fallback.to_string(),
        _ => return None,
    };
    Some(format!("{key} = {value}"))
}

/// Keys every `settings.conf` should carry.
const SETTINGS_KEYS: [&str; 9] = [
    "api_base_url",
    "page_size",
    "sort",
    "order",
    "default_view",
    "request_timeout_secs",
    "connect_timeout_secs",
    "search_debounce_ms",
    "mock_fallback",
];

/// What: Ensure `settings.conf` exists and carries every known key.
///
/// Inputs:
/// - `prefs`: Values used for keys that have to be appended.
///
/// Output:
/// - Path of the settings file, or `None` when it cannot be written.
///
/// Details:
/// - A missing or empty file is seeded with [`SETTINGS_SKELETON_CONTENT`].
/// - Existing user lines are never rewritten; only absent keys are appended.
pub fn ensure_settings_file(prefs: &Settings) -> Option<PathBuf> {
    let path = resolve_settings_config_path().unwrap_or_else(|| config_dir().join("settings.conf"));
    if let Some(dir) = path.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        warn!(path = %dir.display(), error = %e, "[Config] cannot create config directory");
        return None;
    }
    let existing = fs::read_to_string(&path).unwrap_or_default();
    if existing.trim().is_empty() {
        return match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => {
                info!(path = %path.display(), "[Config] wrote default settings.conf");
                Some(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "[Config] cannot write settings.conf");
                None
            }
        };
    }
    let have: HashSet<String> = existing
        .lines()
        .filter(|l| !crate::util::config::skip_comment_or_empty(l))
        .filter_map(|l| crate::util::config::split_key_value(l).map(|(k, _)| normalize_key(k)))
        .collect();
    let missing: Vec<String> = SETTINGS_KEYS
        .iter()
        .filter(|k| !have.contains(**k))
        .filter_map(|k| settings_line(k, prefs))
        .collect();
    if missing.is_empty() {
        return Some(path);
    }
    let mut content = existing;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    for line in &missing {
        content.push_str(line);
        content.push('\n');
    }
    match fs::write(&path, content) {
        Ok(()) => {
            debug!(path = %path.display(), added = missing.len(), "[Config] appended missing settings keys");
            Some(path)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] cannot update settings.conf");
            None
        }
    }
}

/// What: Apply `theme.conf` overrides on top of the built-in palette.
///
/// Inputs:
/// - `content`: Theme file content.
///
/// Output:
/// - The resulting theme plus one diagnostic per rejected line.
pub fn theme_from_overrides(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut errors = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if crate::util::config::skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, value)) = crate::util::config::split_key_value(line) else {
            errors.push(format!("line {}: expected 'key = value'", idx + 1));
            continue;
        };
        if let Err(msg) = apply_theme_override(&mut theme, key, value) {
            errors.push(format!("line {}: {msg}", idx + 1));
        }
    }
    (theme, errors)
}

/// What: Load the theme from `path`, writing the skeleton first when it does not exist.
pub fn load_theme_file(path: &Path) -> Theme {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if fs::write(path, THEME_SKELETON_CONTENT).is_ok() {
            info!(path = %path.display(), "[Theme] wrote default theme.conf");
        }
    }
    let Ok(content) = fs::read_to_string(path) else {
        return Theme::default();
    };
    let (theme, errors) = theme_from_overrides(&content);
    for e in &errors {
        warn!(path = %path.display(), error = %e, "[Theme] ignoring theme line");
    }
    theme
}
