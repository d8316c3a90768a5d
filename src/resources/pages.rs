use serde_json::Value;

use super::hydrate;
use crate::data::{MetricsHistory, Page, PageKeyword, PaginatedResult, SearchStats};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to crawled pages for one domain.
#[derive(Debug)]
pub struct PageResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> PageResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        PageResource {
            http,
            domain: domain.into(),
        }
    }

    /// List crawled pages.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<PaginatedResult<Page>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/pages/", self.domain),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// Fetch one page by id.
    pub async fn get(&self, page_id: &str) -> Result<Page> {
        let data = self
            .http
            .get(&format!("websites/{}/pages/{}/", self.domain, page_id), &[])
            .await?;
        hydrate(data)
    }

    /// List keywords tracked against a page.
    pub async fn keywords(
        &self,
        page_id: &str,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<PageKeyword>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/pages/{}/keywords/", self.domain, page_id),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// List daily search-console stats for a page.
    pub async fn search_stats(
        &self,
        page_id: &str,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<SearchStats>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/pages/{}/search-stats/", self.domain, page_id),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// List historical metric snapshots for a page.
    pub async fn metrics_history(
        &self,
        page_id: &str,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<MetricsHistory>> {
        let data = self
            .http
            .get(
                &format!(
                    "websites/{}/pages/{}/metrics-history/",
                    self.domain, page_id
                ),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
