//! Error types for the SEOJuice client.
//!
//! Every failure carries a human-readable message (sourced from the
//! server's `detail`/`message` fields when available) and a stable
//! machine-readable error code for programmatic branching.
//!
//! # Status mapping
//!
//! | Variant | HTTP status |
//! |---------|-------------|
//! | [`Error::Auth`] | 401 |
//! | [`Error::Forbidden`] | 403 |
//! | [`Error::NotFound`] | 404 |
//! | [`Error::RateLimit`] | 429 |
//! | [`Error::Validation`] | 400, 422 |
//! | [`Error::Server`] | 500 and above |
//! | [`Error::Service`] | any other non-2xx, or a connection failure |
//!
//! Connection-level failures (no HTTP response at all) map to
//! [`Error::Service`] with the fixed code `network_error`; failures of the
//! smart suggestion service use the fixed code `smart_client_error`.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the SEOJuice client.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the API key (HTTP 401).
    #[error("{message}")]
    Auth {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code, `"unknown"` when the server
        /// supplied none.
        error_code: String,
    },

    /// The API key lacks access to the resource (HTTP 403).
    #[error("{message}")]
    Forbidden {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// The request was throttled (HTTP 429).
    #[error("{message}")]
    RateLimit {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// The request was malformed or failed validation (HTTP 400 or 422).
    #[error("{message}")]
    Validation {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// The server failed to process the request (HTTP 500 and above).
    #[error("{message}")]
    Server {
        /// Server-supplied or transport-derived description.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// Any other service failure: an unmapped non-2xx status, a
    /// connection-level failure (`network_error`), or a smart-service
    /// failure (`smart_client_error`).
    #[error("{message}")]
    Service {
        /// Description of the failure.
        message: String,
        /// Stable machine-readable code.
        error_code: String,
    },

    /// A bounded polling loop ran out of attempts. Code is always
    /// `"timeout"`.
    #[error("{message}")]
    Timeout {
        /// Description of what was being waited on.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Underlying decode failure.
        message: String,
    },
}

impl Error {
    /// Map a non-2xx HTTP status to the corresponding error variant,
    /// preserving the extracted message and error code.
    pub fn for_status(status: u16, message: String, error_code: String) -> Self {
        match status {
            401 => Error::Auth { message, error_code },
            403 => Error::Forbidden { message, error_code },
            404 => Error::NotFound { message, error_code },
            429 => Error::RateLimit { message, error_code },
            400 | 422 => Error::Validation { message, error_code },
            s if s >= 500 => Error::Server { message, error_code },
            _ => Error::Service { message, error_code },
        }
    }

    pub(crate) fn service(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Error::Service {
            message: message.into(),
            error_code: error_code.into(),
        }
    }

    pub(crate) fn network(message: impl Into<String>) -> Self {
        Error::service(message, "network_error")
    }

    pub(crate) fn decode(source: impl std::fmt::Display) -> Self {
        Error::Decode {
            message: source.to_string(),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        match self {
            Error::Auth { message, .. }
            | Error::Forbidden { message, .. }
            | Error::NotFound { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Validation { message, .. }
            | Error::Server { message, .. }
            | Error::Service { message, .. }
            | Error::Timeout { message }
            | Error::Decode { message } => message,
        }
    }

    /// Stable machine-readable error code.
    ///
    /// Sourced from the server's `error_code` field when present,
    /// otherwise `"unknown"`. Polling timeouts always report `"timeout"`.
    pub fn error_code(&self) -> &str {
        match self {
            Error::Auth { error_code, .. }
            | Error::Forbidden { error_code, .. }
            | Error::NotFound { error_code, .. }
            | Error::RateLimit { error_code, .. }
            | Error::Validation { error_code, .. }
            | Error::Server { error_code, .. }
            | Error::Service { error_code, .. } => error_code,
            Error::Timeout { .. } => "timeout",
            Error::Decode { .. } => "unknown",
        }
    }
}
