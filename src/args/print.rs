//! One-shot `--print` mode: fetch a single page and write it to stdout.

use std::fmt::Write;

use crate::app::StartupOptions;
use crate::logic::total_pages;
use crate::sources::{FetchError, FetchOutcome, SearchClient};
use crate::state::SearchPage;
use crate::theme::Settings;
use crate::util::{dataset_count, display_date, group_thousands};

/// What: Render a fetched page as plain text.
///
/// Inputs:
/// - `page`: Normalized response
/// - `page_no`: Page that was requested
/// - `size`: Page size that was requested
///
/// Output:
/// - A header line followed by one block per dataset.
#[must_use]
pub fn format_page(page: &SearchPage, page_no: u32, size: u32) -> String {
    let mut out = String::new();
    let pages = total_pages(page.total, size).max(1);
    let _ = writeln!(
        out,
        "{}, page {} of {pages}",
        dataset_count(page.total),
        page_no.min(pages)
    );
    for ds in &page.results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", ds.title);
        if let Some(org) = &ds.organization {
            let _ = writeln!(out, "  {}", org.name);
        }
        let mut facts = Vec::new();
        if let Some(geo) = ds.metadata_value("Geography") {
            facts.push(geo.to_string());
        }
        if !ds.formats.is_empty() {
            facts.push(ds.formats.join(", "));
        }
        facts.push(format!("{} downloads", group_thousands(ds.download_count)));
        if !ds.modified.is_empty() {
            facts.push(format!("updated {}", display_date(&ds.modified)));
        }
        let _ = writeln!(out, "  {}", facts.join(" | "));
        let _ = writeln!(out, "  id: {}", ds.id);
    }
    out
}

/// What: Fetch the requested page once and print it.
///
/// Output:
/// - `Ok(())` after printing live or sample data; `Err` when the request failed with no
///   sample data to show.
///
/// # Errors
/// - Any `FetchError` from building the client, or from the request when sample data is off.
///
/// Details:
/// - When sample data stands in, a warning naming the failure goes to stderr.
pub async fn handle_print(settings: &Settings, startup: &StartupOptions) -> Result<(), FetchError> {
    let client = SearchClient::from_settings(settings)?;
    let page_no = startup.page.max(1);
    tracing::info!(
        page = page_no,
        sample_data = client.mock_fallback(),
        "[Print] fetching one page"
    );
    let outcome = client
        .fetch_or_fallback(&startup.filters, page_no, settings.page_size)
        .await;
    let page = match outcome {
        FetchOutcome::Live(page) => page,
        FetchOutcome::Fallback { page, error } => {
            eprintln!("warning: {error}; showing bundled sample data");
            page
        }
        FetchOutcome::Failed(error) => return Err(error),
    };
    print!("{}", format_page(&page, page_no, settings.page_size));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::sample_page;

    #[test]
    /// What: Plain-text output lists header and dataset facts.
    fn format_page_lists_datasets() {
        let text = format_page(&sample_page(), 1, 9);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1 dataset, page 1 of 1"));
        assert!(text.contains("Sample Dataset - Assam Budget Data"));
        assert!(text.contains("  Finance Department, Government of Assam"));
        assert!(text.contains("  Assam | CSV, PDF | 25 downloads | updated 2025-01-20"));
        assert!(text.contains("  id: mock-1"));
    }

    #[test]
    /// What: An empty page still prints its header.
    fn format_page_empty() {
        let text = format_page(&SearchPage::default(), 4, 9);
        assert_eq!(text, "0 datasets, page 1 of 1\n");
        let many = SearchPage {
            total: 1234,
            ..SearchPage::default()
        };
        assert_eq!(format_page(&many, 2, 9), "1,234 datasets, page 2 of 138\n");
    }

    #[tokio::test]
    /// What: With sample data disabled, an unreachable endpoint is an error.
    async fn handle_print_fails_without_fallback() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        let settings = Settings {
            api_base_url: format!("http://{addr}/"),
            mock_fallback: false,
            connect_timeout_secs: 2,
            ..Settings::default()
        };
        let result = handle_print(&settings, &StartupOptions::default()).await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }
}
