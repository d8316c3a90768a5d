#![doc = include_str!("../README.md")]

//! # Crate layout
//!
//! - **[config]** - Client configuration and URL normalization
//! - **[error]** - The error taxonomy and `Result` alias
//! - **[http]** - Authenticated transport for the primary API
//! - **[data]** - Typed records hydrated from API responses
//! - **[resources]** - Domain-scoped resource accessors
//! - **[inject]** - Smart suggestion fetching and HTML injection
//!
//! Most callers start from [`SeoJuice`] for the analytics API, or from
//! [`SmartClient`] plus [`SeoInjector`] for the injection path.

pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod inject;
pub mod resources;

mod api;

pub use api::SeoJuice;
pub use config::Config;
pub use error::{Error, Result};
pub use http::HttpClient;
pub use inject::{SeoInjector, SmartClient, Suggestions};
