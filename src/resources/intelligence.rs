use serde_json::Value;

use super::{flag, hydrate};
use crate::data::{IntelligenceSummary, PageSpeed, Period, Topology};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to site-wide intelligence for one domain.
#[derive(Debug)]
pub struct IntelligenceResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> IntelligenceResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        IntelligenceResource {
            http,
            domain: domain.into(),
        }
    }

    /// Fetch the headline intelligence summary.
    ///
    /// `include_history` and `include_trends` are sent as `true` only
    /// when set; a false flag is dropped from the query entirely.
    pub async fn summary(
        &self,
        period: Period,
        include_history: bool,
        include_trends: bool,
    ) -> Result<IntelligenceSummary> {
        let data = self
            .http
            .get(
                &format!("websites/{}/intelligence/summary/", self.domain),
                &[
                    ("period", Value::from(period.as_str())),
                    ("include_history", flag(include_history)),
                    ("include_trends", flag(include_trends)),
                ],
            )
            .await?;
        hydrate(data)
    }

    /// Fetch the internal-link topology.
    pub async fn topology(&self) -> Result<Topology> {
        let data = self
            .http
            .get(
                &format!("websites/{}/intelligence/topology/", self.domain),
                &[],
            )
            .await?;
        hydrate(data)
    }

    /// Fetch a lab speed measurement for one URL.
    pub async fn page_speed(&self, url: &str) -> Result<PageSpeed> {
        let data = self
            .http
            .get(
                &format!("websites/{}/intelligence/page-speed/", self.domain),
                &[("url", Value::from(url))],
            )
            .await?;
        hydrate(data)
    }
}
