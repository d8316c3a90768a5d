//! Domain-scoped resource accessors.
//!
//! Each resource is a thin façade over [`HttpClient`](crate::HttpClient)
//! exposing one API area. Resources borrow the transport, so they are
//! cheap to create per call and are normally obtained from
//! [`SeoJuice`](crate::SeoJuice):
//!
//! ```ignore
//! let client = SeoJuice::new("sk-...");
//! let pages = client.pages("example.com").list(1, 10).await?;
//! ```
//!
//! | Resource | API area |
//! |----------|----------|
//! | [`WebsiteResource`] | registered websites |
//! | [`PageResource`] | crawled pages, keywords, stats, history |
//! | [`LinkResource`] | internal links |
//! | [`IntelligenceResource`] | summary, topology, page speed |
//! | [`ClusterResource`] | topic clusters |
//! | [`ContentResource`] | content gaps and decay alerts |
//! | [`CompetitorResource`] | competitor overlap |
//! | [`AisoResource`] | AI-search-optimization metrics |
//! | [`AnalysisResource`] | on-demand page analysis |
//! | [`ReportResource`] | periodic reports and PDFs |
//! | [`KeywordResource`] | tracked keywords |
//! | [`BacklinkResource`] | backlinks and referring domains |
//! | [`AccessibilityResource`] | WCAG issues |
//! | [`ChangeResource`] | proposed on-page changes |
//! | [`GbpResource`] | Business Profile locations and reviews |
//! | [`SimilarResource`] | content-similarity search |

mod accessibility;
mod aiso;
mod analysis;
mod backlinks;
mod changes;
mod clusters;
mod competitors;
mod content;
mod gbp;
mod intelligence;
mod keywords;
mod links;
mod pages;
mod reports;
mod similar;
mod websites;

pub use accessibility::AccessibilityResource;
pub use aiso::AisoResource;
pub use analysis::AnalysisResource;
pub use backlinks::BacklinkResource;
pub use changes::ChangeResource;
pub use clusters::ClusterResource;
pub use competitors::CompetitorResource;
pub use content::ContentResource;
pub use gbp::GbpResource;
pub use intelligence::IntelligenceResource;
pub use keywords::KeywordResource;
pub use links::LinkResource;
pub use pages::PageResource;
pub use reports::ReportResource;
pub use similar::SimilarResource;
pub use websites::WebsiteResource;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Unwrap a `{"results": [...]}` envelope, passing bare arrays through.
pub(crate) fn unwrap_results(data: Value) -> Value {
    match data.get("results") {
        Some(results) => results.clone(),
        None => data,
    }
}

/// Hydrate a typed record from a decoded response value.
pub(crate) fn hydrate<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(Error::decode)
}

/// Opt-in query flag: present as `"true"` or absent, never `"false"`.
pub(crate) fn flag(enabled: bool) -> Value {
    if enabled {
        Value::from("true")
    } else {
        Value::Null
    }
}
