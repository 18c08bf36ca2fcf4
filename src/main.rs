//! civicdata binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use civicdata::{app, args, theme};

/// Log line timestamps in local time, millisecond precision.
struct CivicTimer;

impl tracing_subscriber::fmt::time::FormatTime for CivicTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/civicdata/logs/civicdata.log`.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("civicdata.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CivicTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CivicTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = theme::settings();
    theme::ensure_settings_file(&settings);
    cli.apply_overrides(&mut settings);
    let startup = cli.startup_options();
    tracing::info!(
        endpoint = %settings.api_base_url,
        page_size = settings.page_size,
        print = cli.print,
        "civicdata starting"
    );

    if cli.print {
        if let Err(err) = args::handle_print(&settings, &startup).await {
            tracing::error!(error = %err, "print mode failed");
            eprintln!("civicdata: {err}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(err) = app::run(settings, startup).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("civicdata: {err}");
        std::process::exit(1);
    }
    tracing::info!("civicdata exited");
}
