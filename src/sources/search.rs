//! Fetch client: one GET per request, normalized at the boundary.

use tracing::{debug, trace, warn};

use super::{FetchError, FetchOutcome, SearchClient, encode_query, sample_page};
use crate::state::{FilterState, SearchPage};

/// What: Parse and normalize a search response body.
///
/// Inputs:
/// - `body`: Raw JSON text.
///
/// Output:
/// - `Ok(SearchPage)` with absent fields defaulted; `Err(FetchError::Decode)` for malformed JSON.
///
/// # Errors
/// - Returns `FetchError::Decode` when the body is not JSON or a field has an unusable type.
pub fn parse_search_page(body: &str) -> Result<SearchPage, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode { source })
}

impl SearchClient {
    /// What: Build the full request URL for a search.
    ///
    /// Inputs:
    /// - `filters`, `page`, `size`: Request parameters.
    ///
    /// Output:
    /// - Base URL with the encoded query string appended.
    #[must_use]
    pub fn request_url(&self, filters: &FilterState, page: u32, size: u32) -> reqwest::Url {
        let params = encode_query(filters, page, size, &self.sort);
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(params.iter());
        url
    }

    /// What: Fetch one page of datasets.
    ///
    /// Inputs:
    /// - `filters`: Filter selection.
    /// - `page`: Requested page (1-based).
    /// - `size`: Page size.
    ///
    /// Output:
    /// - `Ok(SearchPage)` on a 2xx response with a JSON body.
    ///
    /// # Errors
    /// - `FetchError::Transport` on connection, timeout or read failures.
    /// - `FetchError::Status` on a non-success status.
    /// - `FetchError::Decode` when the body cannot be parsed.
    ///
    /// Details:
    /// - Issues exactly one request; there is no retry.
    pub async fn fetch(
        &self,
        filters: &FilterState,
        page: u32,
        size: u32,
    ) -> Result<SearchPage, FetchError> {
        let url = self.request_url(filters, page, size);
        debug!(url = %url, "[Fetch] requesting datasets");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { source })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = resp
            .text()
            .await
            .map_err(|source| FetchError::Transport { source })?;
        trace!(bytes = body.len(), body = %body, "[Fetch] raw response");
        let page = parse_search_page(&body)?;
        debug!(
            results = page.results.len(),
            total = page.total,
            "[Fetch] response normalized"
        );
        Ok(page)
    }

    /// What: Fetch a page and decide what the UI should show when it fails.
    ///
    /// Inputs:
    /// - Same as [`Self::fetch`].
    ///
    /// Output:
    /// - `Live` on success; `Fallback` with [`sample_page`] when sample data is enabled;
    ///   `Failed` otherwise.
    pub async fn fetch_or_fallback(
        &self,
        filters: &FilterState,
        page: u32,
        size: u32,
    ) -> FetchOutcome {
        match self.fetch(filters, page, size).await {
            Ok(page) => FetchOutcome::Live(page),
            Err(error) if self.mock_fallback => {
                warn!(error = %error, "[Fetch] request failed; showing sample data");
                FetchOutcome::Fallback {
                    page: sample_page(),
                    error,
                }
            }
            Err(error) => {
                warn!(error = %error, "[Fetch] request failed");
                FetchOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    use super::*;
    use crate::sources::MOCK_DATASET_ID;
    use crate::state::Facet;
    use crate::theme::Settings;

    /// What: Serve a single canned HTTP response on a loopback port.
    ///
    /// Inputs:
    /// - `status_line`: e.g. `"200 OK"`.
    /// - `body`: Response body.
    ///
    /// Output:
    /// - Base URL of the server and a receiver yielding the request line it saw.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            let _ = reader.read_line(&mut request_line);
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) if line == "\r\n" => break,
                    Ok(_) => {}
                    Err(_) => return,
                }
            }
            let _ = tx.send(request_line.trim().to_string());
            let resp = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        });
        (format!("http://{addr}/api/search/dataset/"), rx)
    }

    /// Loopback address nobody listens on.
    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}/api/search/dataset/")
    }

    fn client_for(url: String, mock_fallback: bool) -> SearchClient {
        let settings = Settings {
            api_base_url: url,
            mock_fallback,
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
            ..Settings::default()
        };
        SearchClient::from_settings(&settings).expect("client builds")
    }

    #[test]
    /// What: The request URL carries only non-empty filters plus paging and sort.
    fn request_url_encodes_filters() {
        let client = client_for("https://example.org/api/search/dataset/".into(), true);
        let filters = FilterState::default()
            .with_query("water quality")
            .with_option(Facet::Formats, "CSV", true)
            .with_option(Facet::Formats, "PDF", true);
        let url = client.request_url(&filters, 2, 9);
        assert_eq!(url.path(), "/api/search/dataset/");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("query".into(), "water quality".into()),
                ("formats".into(), "CSV,PDF".into()),
                ("page".into(), "2".into()),
                ("size".into(), "9".into()),
                ("sort".into(), "recent".into()),
                ("order".into(), "desc".into()),
            ]
        );
    }

    #[test]
    /// What: Oddly typed dataset fields do not reject an otherwise valid page.
    ///
    /// Inputs:
    /// - One result with `organization.name: null`, a numeric metadata value and
    ///   `download_count` as a string.
    ///
    /// Output:
    /// - The page parses with the record intact; only a non-object top level is an error.
    fn parse_search_page_keeps_records_with_odd_fields() {
        let body = r#"{
            "results": [{
                "id": 9,
                "title": "Court filings",
                "organization": {"name": null},
                "metadata": [{"metadata_item": {"label": "Year"}, "value": 2024}],
                "download_count": "25"
            }],
            "total": 1
        }"#;
        let page = parse_search_page(body).expect("page parses");
        assert_eq!(page.total, 1);
        let ds = &page.results[0];
        assert_eq!(ds.title, "Court filings");
        assert_eq!(ds.metadata_value("Year"), Some("2024"));
        assert_eq!(ds.download_count, 25);
        assert!(matches!(
            parse_search_page(r#"{"results": 5}"#),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    /// What: A malformed base URL is rejected when the client is built.
    fn invalid_base_url_is_rejected() {
        let settings = Settings {
            api_base_url: "not a url".into(),
            ..Settings::default()
        };
        let err = SearchClient::from_settings(&settings).expect_err("must fail");
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    /// What: A successful response is normalized and the query reaches the server.
    ///
    /// Inputs:
    /// - Server answering 200 with results but no aggregations.
    ///
    /// Output:
    /// - `Live` outcome, defaulted aggregations, request line containing the encoded sector.
    async fn fetch_normalizes_live_response() {
        let (url, seen) = serve_once(
            "200 OK",
            r#"{"results":[{"id":7,"title":"Rainfall","description":"Daily rainfall"}],"total":12}"#,
        );
        let client = client_for(url, true);
        let filters = FilterState::default().with_option(Facet::Sectors, "Climate Action", true);
        let outcome = client.fetch_or_fallback(&filters, 1, 9).await;
        let page = match outcome {
            FetchOutcome::Live(page) => page,
            other => panic!("expected live outcome, got {other:?}"),
        };
        assert_eq!(page.total, 12);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, "7");
        assert!(page.aggregations.sectors.is_empty());
        let request_line = seen.recv().expect("request seen");
        assert!(request_line.starts_with("GET /api/search/dataset/?"));
        assert!(request_line.contains("sectors=Climate+Action"));
        assert!(request_line.contains("page=1"));
        assert!(!request_line.contains("query="));
    }

    #[tokio::test]
    /// What: Network failure yields the single sample dataset and keeps the error visible.
    async fn network_failure_falls_back_to_sample_data() {
        let client = client_for(closed_port_url(), true);
        let outcome = client
            .fetch_or_fallback(&FilterState::default(), 1, 9)
            .await;
        assert!(matches!(outcome.error(), Some(FetchError::Transport { .. })));
        let page = outcome.page().expect("sample page");
        assert_eq!(page.total, 1);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, MOCK_DATASET_ID);
        assert_eq!(page.aggregations.geography.get("Assam"), Some(15));
    }

    #[tokio::test]
    /// What: Non-2xx statuses are reported as such; without fallback nothing is shown.
    async fn http_error_without_fallback_fails() {
        let (url, _seen) = serve_once("503 Service Unavailable", "{}");
        let client = client_for(url, false);
        let outcome = client
            .fetch_or_fallback(&FilterState::default(), 1, 9)
            .await;
        assert!(outcome.page().is_none());
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(FetchError::Status { status: 503 })
        ));
    }

    #[tokio::test]
    /// What: Malformed JSON is a decode error.
    async fn malformed_body_is_decode_error() {
        let (url, _seen) = serve_once("200 OK", "<html>oops</html>");
        let client = client_for(url, false);
        let err = client
            .fetch(&FilterState::default(), 1, 9)
            .await
            .expect_err("must fail");
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
