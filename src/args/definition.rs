//! Command-line argument definition and processing.

use clap::Parser;

use crate::app::StartupOptions;
use crate::state::{Facet, FacetSelection, FilterState, ViewMode};
use crate::theme::Settings;

/// civicdata - A fast, friendly TUI for browsing and filtering open datasets
#[derive(Parser, Debug)]
#[command(name = "civicdata")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing and filtering open datasets", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Search endpoint (overrides `api_base_url` in settings.conf)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Datasets per page (overrides `page_size`)
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Start in list view instead of cards
    #[arg(long)]
    pub list: bool,

    /// Initial free-text query
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Sector to filter by (repeatable or comma-separated)
    #[arg(long = "sector", value_name = "LABEL")]
    pub sectors: Vec<String>,

    /// Tag to filter by (repeatable or comma-separated)
    #[arg(long = "tag", value_name = "LABEL")]
    pub tags: Vec<String>,

    /// Data format to filter by (repeatable or comma-separated)
    #[arg(long = "format", value_name = "LABEL")]
    pub formats: Vec<String>,

    /// Geography to filter by
    #[arg(long, value_name = "LABEL")]
    pub geography: Option<String>,

    /// Page to open first
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Print one page of results to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Report failed requests instead of showing bundled sample data
    #[arg(long)]
    pub no_mock_fallback: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Apply command-line overrides on top of file settings.
    ///
    /// Details:
    /// - Values are re-normalized afterwards, so an out-of-range `--page-size` is clamped.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api_base_url.clone_from(url);
        }
        if let Some(size) = self.page_size {
            settings.page_size = size;
        }
        if self.list {
            settings.default_view = ViewMode::List;
        }
        if self.no_mock_fallback {
            settings.mock_fallback = false;
        }
        crate::theme::settings::normalize(settings);
    }

    /// What: Filters, page and view for the first request.
    #[must_use]
    pub fn startup_options(&self) -> StartupOptions {
        let mut filters = FilterState::default().with_query(self.query.as_deref().unwrap_or_default());
        for (facet, labels) in [
            (Facet::Sectors, &self.sectors),
            (Facet::Tags, &self.tags),
            (Facet::Formats, &self.formats),
        ] {
            for raw in labels {
                for label in FacetSelection::from_joined(raw).iter() {
                    filters = filters.with_option(facet, label, true);
                }
            }
        }
        if let Some(geo) = &self.geography {
            filters = filters.with_geography(geo.trim(), true);
        }
        StartupOptions {
            filters,
            page: self.page.max(1),
            view: self.list.then_some(ViewMode::List),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Filter flags build the initial filter state; repeats and commas both work.
    fn filter_flags_build_startup_options() {
        let args = Args::parse_from([
            "civicdata",
            "-q",
            "rainfall",
            "--sector",
            "Public Finance",
            "--sector",
            "Gender",
            "--tag",
            "Budget, Courts,",
            "--format",
            "CSV",
            "--geography",
            "Assam",
            "--page",
            "3",
            "--list",
        ]);
        let start = args.startup_options();
        assert_eq!(start.filters.query, "rainfall");
        assert_eq!(start.filters.sectors.joined(), "Public Finance,Gender");
        assert_eq!(start.filters.tags.joined(), "Budget,Courts");
        assert_eq!(start.filters.formats.joined(), "CSV");
        assert_eq!(start.filters.geography.as_deref(), Some("Assam"));
        assert_eq!(start.page, 3);
        assert_eq!(start.view, Some(ViewMode::List));
    }

    #[test]
    /// What: Endpoint, size and fallback flags override settings and are normalized.
    fn overrides_apply_to_settings() {
        let args = Args::parse_from([
            "civicdata",
            "--api-url",
            "http://localhost:8000/api/search/dataset/",
            "--page-size",
            "500",
            "--no-mock-fallback",
        ]);
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings.api_base_url, "http://localhost:8000/api/search/dataset/");
        assert_eq!(settings.page_size, 100);
        assert!(!settings.mock_fallback);
        assert_eq!(settings.default_view, ViewMode::Cards);

        let defaults = Args::parse_from(["civicdata"]);
        assert_eq!(defaults.startup_options(), StartupOptions {
            page: 1,
            ..StartupOptions::default()
        });
    }
}
