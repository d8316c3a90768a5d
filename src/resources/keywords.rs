use serde_json::Value;

use crate::data::{Keyword, PaginatedResult};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to tracked keywords for one domain.
#[derive(Debug)]
pub struct KeywordResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> KeywordResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        KeywordResource {
            http,
            domain: domain.into(),
        }
    }

    /// List tracked keywords, optionally filtered by category.
    pub async fn list(
        &self,
        category: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<Keyword>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/keywords/", self.domain),
                &[
                    ("category", opt(category)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
