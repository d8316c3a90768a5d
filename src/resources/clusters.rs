use serde_json::Value;

use super::hydrate;
use crate::data::{ClusterDetail, ClusterSummary, PaginatedResult};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to topic clusters for one domain.
#[derive(Debug)]
pub struct ClusterResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> ClusterResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        ClusterResource {
            http,
            domain: domain.into(),
        }
    }

    /// List topic clusters.
    pub async fn list(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<ClusterSummary>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/clusters/", self.domain),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// Fetch one cluster with keywords and time series.
    pub async fn get(&self, cluster_id: i64) -> Result<ClusterDetail> {
        let data = self
            .http
            .get(
                &format!("websites/{}/clusters/{}/", self.domain, cluster_id),
                &[],
            )
            .await?;
        hydrate(data)
    }
}
