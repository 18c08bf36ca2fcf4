//! Theme, settings and config-path handling.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Config file skeletons and first-run seeding.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings parsing and normalization.
pub mod settings;
/// Theme store and caching.
mod store;
/// Theme and settings type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_file};
pub use paths::{config_dir, logs_dir};
pub use settings::settings;
pub use store::theme;
pub use types::{DEFAULT_API_BASE_URL, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that mutate `HOME` or config files.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
