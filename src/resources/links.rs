use serde_json::Value;

use crate::data::{Link, PaginatedResult};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to internal links for one domain.
#[derive(Debug)]
pub struct LinkResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> LinkResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        LinkResource {
            http,
            domain: domain.into(),
        }
    }

    /// List internal links built for the domain.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<PaginatedResult<Link>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/links/", self.domain),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
