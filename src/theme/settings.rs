use std::fs;

use tracing::{debug, warn};

use crate::sources::{DEFAULT_ORDER, DEFAULT_SORT};
use crate::state::ViewMode;
use crate::theme::parsing::{normalize_key, parse_bool, strip_value_comment};
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

/// Largest page size accepted from configuration.
const MAX_PAGE_SIZE: u32 = 100;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Settings to populate; keys not present keep their value.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` lines; `#` and `//` lines are comments.
/// - Unknown keys and unparsable values are logged and ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if crate::util::config::skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = crate::util::config::split_key_value(line) else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_value_comment(raw_val);
        let applied = match key.as_str() {
            "api_base_url" | "api_url" | "base_url" | "endpoint" => {
                settings.api_base_url = val.to_string();
                true
            }
            "page_size" | "size" | "per_page" => val.parse().map(|v| settings.page_size = v).is_ok(),
            "sort" | "sort_by" => {
                settings.sort = val.to_string();
                true
            }
            "order" | "sort_order" => {
                settings.order = val.to_ascii_lowercase();
                true
            }
            "default_view" | "view" => ViewMode::from_config_key(val)
                .map(|v| settings.default_view = v)
                .is_some(),
            "request_timeout_secs" | "timeout" => val
                .parse()
                .map(|v| settings.request_timeout_secs = v)
                .is_ok(),
            "connect_timeout_secs" | "connect_timeout" => val
                .parse()
                .map(|v| settings.connect_timeout_secs = v)
                .is_ok(),
            "search_debounce_ms" | "debounce_ms" => val
                .parse()
                .map(|v| settings.search_debounce_ms = v)
                .is_ok(),
            "mock_fallback" | "sample_data_on_error" => parse_bool(val)
                .map(|v| settings.mock_fallback = v)
                .is_some(),
            _ => {
                debug!(key = %key, "[Config] ignoring unknown settings key");
                true
            }
        };
        if !applied {
            warn!(key = %key, value = %val, "[Config] invalid settings value, keeping default");
        }
    }
}

/// What: Clamp settings into usable ranges.
///
/// Details:
/// - Page size within `1..=100`; timeouts at least one second.
/// - Blank sort falls back to `recent`; order other than `asc`/`desc` falls back to `desc`.
/// - A blank base URL falls back to the default endpoint.
pub fn normalize(settings: &mut Settings) {
    settings.page_size = settings.page_size.clamp(1, MAX_PAGE_SIZE);
    settings.request_timeout_secs = settings.request_timeout_secs.max(1);
    settings.connect_timeout_secs = settings.connect_timeout_secs.max(1);
    if settings.sort.trim().is_empty() {
        settings.sort = DEFAULT_SORT.to_string();
    }
    if !matches!(settings.order.as_str(), "asc" | "desc") {
        settings.order = DEFAULT_ORDER.to_string();
    }
    if settings.api_base_url.trim().is_empty() {
        settings.api_base_url = super::types::DEFAULT_API_BASE_URL.to_string();
    }
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    if let Some(p) = resolve_settings_config_path() {
        match fs::read_to_string(&p) {
            Ok(content) => {
                debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
                parse_settings(&content, &mut out);
            }
            Err(e) => {
                warn!(path = %p.display(), error = %e, "[Config] settings.conf unreadable, using defaults");
            }
        }
    }
    normalize(&mut out);
    out
}
