use serde_json::Value;

use crate::data::{AccessibilityIssue, PaginatedResult};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to accessibility issues for one domain.
#[derive(Debug)]
pub struct AccessibilityResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> AccessibilityResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        AccessibilityResource {
            http,
            domain: domain.into(),
        }
    }

    /// List accessibility issues with optional filters.
    pub async fn list(
        &self,
        severity: Option<&str>,
        category: Option<&str>,
        auto_fixable: Option<bool>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<AccessibilityIssue>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/accessibility/", self.domain),
                &[
                    ("severity", opt(severity)),
                    ("category", opt(category)),
                    ("auto_fixable", opt(auto_fixable)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
