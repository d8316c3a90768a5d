use serde_json::{json, Value};

use super::{hydrate, unwrap_results};
use crate::data::{GbpLocation, GbpReview, PaginatedResult};
use crate::error::Result;
use crate::http::{opt, HttpClient};

/// Access to Google Business Profile data for one domain.
#[derive(Debug)]
pub struct GbpResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> GbpResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        GbpResource {
            http,
            domain: domain.into(),
        }
    }

    /// List linked Business Profile locations.
    ///
    /// Accepts both the `{"results": [...]}` envelope and a bare array.
    pub async fn locations(&self) -> Result<Vec<GbpLocation>> {
        let data = self
            .http
            .get(&format!("websites/{}/gbp/locations/", self.domain), &[])
            .await?;
        hydrate(unwrap_results(data))
    }

    /// List customer reviews with optional filters.
    pub async fn reviews(
        &self,
        rating: Option<i64>,
        sentiment: Option<&str>,
        needs_attention: Option<bool>,
        location_id: Option<i64>,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<GbpReview>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/gbp/reviews/", self.domain),
                &[
                    ("rating", opt(rating)),
                    ("sentiment", opt(sentiment)),
                    ("needs_attention", opt(needs_attention)),
                    ("location_id", opt(location_id)),
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// Post a reply to a review.
    ///
    /// Returns the raw acknowledgement payload.
    pub async fn reply_to_review(&self, review_id: i64, reply_text: &str) -> Result<Value> {
        self.http
            .post(
                &format!("websites/{}/gbp/reviews/{}/reply/", self.domain, review_id),
                &json!({ "reply_text": reply_text }),
            )
            .await
    }
}
