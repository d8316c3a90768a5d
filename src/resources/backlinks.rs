use serde_json::Value;

use crate::data::{Backlink, BacklinkDomain, PaginatedResult};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to backlinks and referring domains for one domain.
#[derive(Debug)]
pub struct BacklinkResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> BacklinkResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        BacklinkResource {
            http,
            domain: domain.into(),
        }
    }

    /// List backlinks.
    ///
    /// `dofollow` is tri-state: `Some(true)`/`Some(false)` filter, `None`
    /// drops the parameter.
    pub async fn list(
        &self,
        status: Option<&str>,
        dofollow: Option<bool>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<Backlink>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/backlinks/", self.domain),
                &[
                    ("status", opt(status)),
                    ("dofollow", opt(dofollow)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// List referring domains.
    pub async fn list_domains(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<BacklinkDomain>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/backlinks/domains/", self.domain),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }
}
