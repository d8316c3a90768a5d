use serde_json::Value;

use super::{flag, hydrate};
use crate::data::{AisoData, Period};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to AI-search-optimization metrics for one domain.
#[derive(Debug)]
pub struct AisoResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> AisoResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        AisoResource {
            http,
            domain: domain.into(),
        }
    }

    /// Fetch AISO metrics for the given period.
    pub async fn get(&self, period: Period, include_history: bool) -> Result<AisoData> {
        let data = self
            .http
            .get(
                &format!("websites/{}/aiso/", self.domain),
                &[
                    ("period", Value::from(period.as_str())),
                    ("include_history", flag(include_history)),
                ],
            )
            .await?;
        hydrate(data)
    }
}
