use std::sync::OnceLock;

use super::config::load_theme_file;
use super::paths::{config_dir, resolve_theme_config_path};
use super::types::Theme;

/// Process-wide palette, loaded on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Return the application's theme palette, loading `theme.conf` on first call.
///
/// Details:
/// - Searched under `$HOME/.config/civicdata/` then `$XDG_CONFIG_HOME/civicdata/`.
/// - When no file exists the commented skeleton is written and the built-in palette is used.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        let path = resolve_theme_config_path().unwrap_or_else(|| config_dir().join("theme.conf"));
        tracing::debug!(path = %path.display(), "[Theme] loading theme");
        load_theme_file(&path)
    })
}
