use serde_json::Value;

use crate::data::{ContentDecayAlert, ContentGap, PaginatedResult};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to content gaps and decay alerts for one domain.
#[derive(Debug)]
pub struct ContentResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> ContentResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        ContentResource {
            http,
            domain: domain.into(),
        }
    }

    /// List content gaps, optionally filtered by category and intent.
    pub async fn list_gaps(
        &self,
        category: Option<&str>,
        intent: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<ContentGap>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/content/gaps/", self.domain),
                &[
                    ("category", opt(category)),
                    ("intent", opt(intent)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// List decay alerts.
    ///
    /// `is_active` is tri-state: `Some(true)`/`Some(false)` filter, `None`
    /// drops the parameter.
    pub async fn list_decay_alerts(
        &self,
        is_active: Option<bool>,
        severity: Option<&str>,
        decay_type: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<ContentDecayAlert>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/content/decay-alerts/", self.domain),
                &[
                    ("is_active", opt(is_active)),
                    ("severity", opt(severity)),
                    ("decay_type", opt(decay_type)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
