use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG config base.
const APP_DIR: &str = "civicdata";

/// Candidate locations for a config file, in priority order.
fn config_candidates(file: &str) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(Path::new(&h).join(".config").join(APP_DIR).join(file));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        candidates.push(Path::new(&xdg).join(APP_DIR).join(file));
    }
    candidates
}

/// Existing `theme.conf`, if any.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    config_candidates("theme.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Existing `settings.conf`, if any.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    config_candidates("settings.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/civicdata`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for civicdata (ensured to exist)
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/civicdata/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
