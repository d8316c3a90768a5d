//! Client configuration.
//!
//! [`Config`] carries the endpoints and request settings shared by
//! [`HttpClient`](crate::HttpClient) and
//! [`SmartClient`](crate::SmartClient). Values are immutable once the
//! configuration is built; construct one with [`Config::new`] and the
//! `with_*` builder methods.
//!
//! # Examples
//!
//! ```ignore
//! use seojuice::Config;
//! use std::time::Duration;
//!
//! let config = Config::new()
//!     .with_base_url("https://staging.seojuice.com/api/v2/")
//!     .with_timeout(Duration::from_secs(10));
//!
//! // Trailing slashes are stripped on construction.
//! assert_eq!(config.base_url(), "https://staging.seojuice.com/api/v2");
//! ```

use std::time::Duration;

/// Default base URL of the primary API.
pub const DEFAULT_BASE_URL: &str = "https://seojuice.com/api/v2";

/// Default base URL of the smart suggestion service.
pub const DEFAULT_SMART_URL: &str = "https://smart.seojuice.io";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client configuration.
///
/// Both URLs are normalized when set: any number of trailing slashes is
/// stripped, so a stored URL never ends in `/` and path concatenation in
/// the transport produces exactly one separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    smart_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Config {
    /// Create a configuration with the production defaults.
    pub fn new() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            smart_url: DEFAULT_SMART_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("seojuice-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the primary API base URL. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = strip_trailing_slashes(base_url.into());
        self
    }

    /// Set the smart suggestion service base URL. Trailing slashes are
    /// stripped.
    pub fn with_smart_url(mut self, smart_url: impl Into<String>) -> Self {
        self.smart_url = strip_trailing_slashes(smart_url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value sent on every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Primary API base URL, never ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Smart service base URL, never ending in `/`.
    pub fn smart_url(&self) -> &str {
        &self.smart_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_trailing_slashes(url: String) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.len() == url.len() {
        url
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.smart_url(), DEFAULT_SMART_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("seojuice-rust/"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = Config::new().with_base_url("https://api.test.com/v2/");
        assert_eq!(config.base_url(), "https://api.test.com/v2");
    }

    #[test]
    fn test_base_url_many_trailing_slashes_stripped() {
        let config = Config::new().with_base_url("https://api.test.com/v2///");
        assert_eq!(config.base_url(), "https://api.test.com/v2");
    }

    #[test]
    fn test_base_url_without_trailing_slash_unchanged() {
        let config = Config::new().with_base_url("https://api.test.com/v2");
        assert_eq!(config.base_url(), "https://api.test.com/v2");
    }

    #[test]
    fn test_smart_url_trailing_slash_stripped() {
        let config = Config::new().with_smart_url("https://smart.test.io//");
        assert_eq!(config.smart_url(), "https://smart.test.io");
    }

    #[test]
    fn test_custom_user_agent() {
        let config = Config::new().with_user_agent("my-app/2.0");
        assert_eq!(config.user_agent(), "my-app/2.0");
    }
}
