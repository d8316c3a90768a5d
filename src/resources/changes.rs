use serde_json::Value;

use crate::data::{ChangeRecord, PaginatedResult, RiskLevel};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to proposed on-page changes for one domain.
#[derive(Debug)]
pub struct ChangeResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> ChangeResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        ChangeResource {
            http,
            domain: domain.into(),
        }
    }

    /// List change records with optional filters.
    pub async fn list(
        &self,
        status: Option<&str>,
        change_type: Option<&str>,
        risk_level: Option<RiskLevel>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<ChangeRecord>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/changes/", self.domain),
                &[
                    ("status", opt(status)),
                    ("change_type", opt(change_type)),
                    ("risk_level", opt(risk_level.map(RiskLevel::as_str))),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
