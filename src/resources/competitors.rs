use serde_json::Value;

use super::flag;
use crate::data::{Competitor, PaginatedResult};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to competitor overlap data for one domain.
#[derive(Debug)]
pub struct CompetitorResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> CompetitorResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        CompetitorResource {
            http,
            domain: domain.into(),
        }
    }

    /// List competitors, optionally with trend series.
    pub async fn list(
        &self,
        include_trends: bool,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<Competitor>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/competitors/", self.domain),
                &[
                    ("include_trends", flag(include_trends)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
