//! Smart suggestion fetching and HTML tag injection.
//!
//! This module covers the on-the-fly enrichment path: fetch a
//! [`Suggestions`] bundle for a page from the smart service, then merge
//! it into the outgoing HTML with [`SeoInjector`].
//!
//! # Module Organization
//!
//! ```text
//! inject/
//! ├── suggestions - the Suggestions value and its emptiness contract
//! ├── smart       - SmartClient, the suggestion fetcher
//! └── injector    - SeoInjector, the HTML rewriter
//! ```
//!
//! # Fail-open usage
//!
//! Middleware integrating the injector is expected to fail open: when the
//! fetch step errors, serve the original document untouched.
//!
//! ```ignore
//! let html = match smart.suggestions(page_url).await {
//!     Ok(suggestions) => injector.inject(&original, &suggestions),
//!     Err(_) => original,
//! };
//! ```

mod injector;
mod smart;
mod suggestions;

pub use injector::SeoInjector;
pub use smart::SmartClient;
pub use suggestions::Suggestions;
