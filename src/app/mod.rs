//! Terminal application: runtime loop, background workers and terminal setup.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::handlers::handle_fetch_response;
pub use runtime::workers::search::spawn_search_worker;
pub use runtime::{StartupOptions, initialize_app_state, run};
