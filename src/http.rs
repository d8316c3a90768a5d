//! Authenticated HTTP transport for the primary API.
//!
//! [`HttpClient`] is the single gateway every resource accessor goes
//! through. It owns the URL construction and query-encoding rules, the
//! fixed request headers, and the mapping from HTTP failures to the
//! [`Error`](crate::Error) taxonomy.
//!
//! # Query encoding
//!
//! Query values are [`serde_json::Value`]s so call sites can mix types:
//!
//! | Value | Encoding |
//! |-------|----------|
//! | `Null` | dropped entirely (no `key=` placeholder) |
//! | `Bool` | literal `"true"` / `"false"` |
//! | `String` | as-is, percent-encoded |
//! | `Number` | decimal representation |
//!
//! # Examples
//!
//! ```ignore
//! use seojuice::{Config, HttpClient};
//! use serde_json::Value;
//!
//! let client = HttpClient::new("sk-...", Config::new());
//! let data = client
//!     .get("websites/example.com/pages/", &[("page", Value::from(1))])
//!     .await?;
//! ```

use bytes::Bytes;
use reqwest::header;
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Convert an optional query value into the transport's null sentinel.
///
/// `None` becomes [`Value::Null`], which the transport drops from the
/// query string entirely.
pub fn opt<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

/// Authenticated client for the primary SEOJuice API.
///
/// Sends the API key as a bearer credential on every request, plus the
/// configured `User-Agent` and `Accept: application/json`. The underlying
/// [`reqwest::Client`] is injectable for testing via
/// [`HttpClient::with_client`].
///
/// No retries are performed; every failure surfaces to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    api_key: String,
    config: Config,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with a connection pool configured from `config`.
    pub fn new(api_key: impl Into<String>, config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self::with_client(api_key, config, client)
    }

    /// Create a client around an existing [`reqwest::Client`].
    pub fn with_client(
        api_key: impl Into<String>,
        config: Config,
        client: reqwest::Client,
    ) -> Self {
        HttpClient {
            api_key: api_key.into(),
            config,
            client,
        }
    }

    /// Issue a GET request and decode the JSON response body.
    ///
    /// The decoded body is returned unmodified, whatever its shape; list
    /// endpoints may yield an object or a bare array.
    pub async fn get(&self, path: &str, query: &[(&str, Value)]) -> Result<Value> {
        let url = self.build_url(path, query)?;
        debug!(method = "GET", url = %url, "request");

        let response = self.execute(Method::GET, url, None).await?;
        response.json().await.map_err(Error::decode)
    }

    /// Issue a POST request with a JSON body and decode the JSON response.
    ///
    /// The body is serialized as given; no query filtering applies.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.build_url(path, &[])?;
        debug!(method = "POST", url = %url, "request");

        let response = self.execute(Method::POST, url, Some(body)).await?;
        response.json().await.map_err(Error::decode)
    }

    /// Issue a GET request and return the raw, undecoded response body.
    ///
    /// Used for binary and text downloads such as report PDFs.
    pub async fn get_raw(&self, path: &str, query: &[(&str, Value)]) -> Result<Bytes> {
        let url = self.build_url(path, query)?;
        debug!(method = "GET", url = %url, "raw request");

        let response = self.execute(Method::GET, url, None).await?;
        response.bytes().await.map_err(Error::decode)
    }

    /// Send the request and run the non-2xx mapping.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .request(method, url)
            .header(header::USER_AGENT, self.config.user_agent())
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.api_key);

        if let Some(body) = body {
            request = request.json(body);
        }

        // A connection-level failure has no status and no body; it maps
        // straight to the generic kind with the fixed network code.
        let response = request
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        check_status(response).await
    }

    fn build_url(&self, path: &str, query: &[(&str, Value)]) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.config.base_url(),
            path.trim_start_matches('/')
        );
        let mut url =
            Url::parse(&raw).map_err(|e| Error::service(e.to_string(), "unknown"))?;

        let filtered: Vec<&(&str, Value)> =
            query.iter().filter(|(_, value)| !value.is_null()).collect();

        if !filtered.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filtered {
                match value {
                    Value::Bool(true) => pairs.append_pair(key, "true"),
                    Value::Bool(false) => pairs.append_pair(key, "false"),
                    Value::String(s) => pairs.append_pair(key, s),
                    other => pairs.append_pair(key, &other.to_string()),
                };
            }
        }

        Ok(url)
    }
}

/// Map a non-2xx response to the error taxonomy.
///
/// The body is parsed as JSON when possible; `detail` wins over `message`
/// for the description, and `error_code` defaults to `"unknown"`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = response
        .error_for_status_ref()
        .err()
        .map(|e| e.to_string())
        .unwrap_or_else(|| format!("HTTP {}", status));

    let body = response.text().await.unwrap_or_default();
    let decoded: Value =
        serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(Map::new()));

    let message = decoded
        .get("detail")
        .and_then(Value::as_str)
        .or_else(|| decoded.get("message").and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or(fallback);

    let error_code = decoded
        .get("error_code")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_owned();

    warn!(status = status.as_u16(), error_code = %error_code, "API error");

    Err(Error::for_status(status.as_u16(), message, error_code))
}
