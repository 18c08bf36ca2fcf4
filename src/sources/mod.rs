//! Network access to the dataset search API.
//!
//! The query encoder, the HTTP client and the bundled sample payload live in
//! submodules; this module holds the shared client, error and outcome types.

use std::time::Duration;

use thiserror::Error;

use crate::state::SearchPage;
use crate::theme::Settings;

mod mock;
mod query;
mod search;

pub use mock::{MOCK_DATASET_ID, sample_page};
pub use query::{DEFAULT_ORDER, DEFAULT_SORT, QueryParams, SortSpec, encode_query};
pub use search::parse_search_page;

/// Errors raised while talking to the search API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured base URL cannot be parsed.
    #[error("invalid API URL {url}: {details}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parser message.
        details: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Connection, timeout or body transfer failure.
    #[error("network error: {source}")]
    Transport {
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error: status {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },
    /// The body is not a JSON document of the expected shape.
    #[error("invalid response body: {source}")]
    Decode {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result of one fetch as seen by the UI.
///
/// Failures are always carried through, even when sample data is substituted,
/// so the results area can tell a failed request from an empty one.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered and the body was normalized.
    Live(SearchPage),
    /// The request failed; bundled sample data stands in.
    Fallback {
        /// Sample payload.
        page: SearchPage,
        /// Why the live request failed.
        error: FetchError,
    },
    /// The request failed and no substitute is configured.
    Failed(FetchError),
}

impl FetchOutcome {
    /// Page to display, if any.
    #[must_use]
    pub const fn page(&self) -> Option<&SearchPage> {
        match self {
            Self::Live(page) | Self::Fallback { page, .. } => Some(page),
            Self::Failed(_) => None,
        }
    }

    /// Failure behind this outcome, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { error, .. } | Self::Failed(error) => Some(error),
        }
    }
}

/// HTTP client bound to one search endpoint.
#[derive(Clone, Debug)]
pub struct SearchClient {
    /// Shared connection pool.
    http: reqwest::Client,
    /// Endpoint the query string is appended to.
    base_url: reqwest::Url,
    /// Sort key and direction sent with every request.
    sort: SortSpec,
    /// Substitute sample data when a request fails.
    mock_fallback: bool,
}

impl SearchClient {
    /// What: Build a client for the endpoint and timeouts configured in `settings`.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings (base URL, sort, timeouts, fallback flag).
    ///
    /// Output:
    /// - `Ok(SearchClient)`; `Err(FetchError)` when the URL is malformed or the client cannot be built.
    ///
    /// # Errors
    /// - `FetchError::InvalidUrl` for an unparsable `api_base_url`.
    /// - `FetchError::Client` when reqwest rejects the client configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let base_url =
            reqwest::Url::parse(settings.api_base_url.trim()).map_err(|e| FetchError::InvalidUrl {
                url: settings.api_base_url.clone(),
                details: e.to_string(),
            })?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("civicdata/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self {
            http,
            base_url,
            sort: SortSpec {
                sort: settings.sort.clone(),
                order: settings.order.clone(),
            },
            mock_fallback: settings.mock_fallback,
        })
    }

    /// Endpoint without query parameters.
    #[must_use]
    pub const fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Whether failed requests are answered with sample data.
    #[must_use]
    pub const fn mock_fallback(&self) -> bool {
        self.mock_fallback
    }
}
