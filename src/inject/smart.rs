//! Client for the smart suggestion service.

use reqwest::header;
use tracing::debug;

use super::suggestions::Suggestions;
use crate::config::Config;
use crate::error::{Error, Result};

/// Fetches injection suggestions for a page from the smart service.
///
/// Unlike [`HttpClient`](crate::HttpClient), this client does not
/// discriminate failures: a connection error, a non-2xx status and an
/// unreadable body all surface as the generic service error with the
/// fixed code `smart_client_error`. Callers are expected to fail open
/// and serve unmodified content when that happens.
#[derive(Debug, Clone)]
pub struct SmartClient {
    config: Config,
    client: reqwest::Client,
}

impl SmartClient {
    /// Create a client with a connection pool configured from `config`.
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self::with_client(config, client)
    }

    /// Create a client around an existing [`reqwest::Client`].
    pub fn with_client(config: Config, client: reqwest::Client) -> Self {
        SmartClient { config, client }
    }

    /// Fetch the suggestion bundle for one page URL.
    ///
    /// Collections missing from the response default to empty, so a
    /// sparse payload still produces a usable [`Suggestions`].
    pub async fn suggestions(&self, url: &str) -> Result<Suggestions> {
        let endpoint = format!("{}/suggestions", self.config.smart_url());
        debug!(endpoint = %endpoint, page = url, "fetching suggestions");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("url", url)])
            .header(header::USER_AGENT, self.config.user_agent())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(smart_error)?;

        response
            .error_for_status()
            .map_err(smart_error)?
            .json()
            .await
            .map_err(smart_error)
    }
}

fn smart_error(source: reqwest::Error) -> Error {
    Error::service(
        format!("Failed to fetch suggestions: {}", source),
        "smart_client_error",
    )
}
