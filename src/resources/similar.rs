use serde_json::Value;

use super::hydrate;
use crate::data::SimilarPagesResult;
use crate::error::Result;
use crate::http::HttpClient;

/// Access to content-similarity search for one domain.
#[derive(Debug)]
pub struct SimilarResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> SimilarResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        SimilarResource {
            http,
            domain: domain.into(),
        }
    }

    /// Find pages similar in content to `url`.
    pub async fn find(&self, url: &str, limit: i64) -> Result<SimilarPagesResult> {
        let data = self
            .http
            .get(
                &format!("websites/{}/similar/", self.domain),
                &[("url", Value::from(url)), ("limit", Value::from(limit))],
            )
            .await?;
        hydrate(data)
    }
}
