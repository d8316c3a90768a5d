use std::time::Duration;

use serde_json::json;
use tokio::time::sleep;
use tracing::debug;

use super::hydrate;
use crate::data::AnalysisStatus;
use crate::error::{Error, Result};
use crate::http::HttpClient;

/// Default interval between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default number of status polls before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Access to on-demand page analysis for one domain.
#[derive(Debug)]
pub struct AnalysisResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> AnalysisResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        AnalysisResource {
            http,
            domain: domain.into(),
        }
    }

    /// Submit a URL for analysis.
    pub async fn submit(&self, url: &str) -> Result<AnalysisStatus> {
        let data = self
            .http
            .post(
                &format!("websites/{}/analysis/", self.domain),
                &json!({ "url": url }),
            )
            .await?;
        hydrate(data)
    }

    /// Fetch the current status of a submitted analysis.
    pub async fn status(&self, analysis_id: &str) -> Result<AnalysisStatus> {
        let data = self
            .http
            .get(
                &format!("websites/{}/analysis/{}/", self.domain, analysis_id),
                &[],
            )
            .await?;
        hydrate(data)
    }

    /// Poll with the default interval and attempt limit.
    ///
    /// See [`wait_for_completion_with`](Self::wait_for_completion_with).
    pub async fn wait_for_completion(&self, analysis_id: &str) -> Result<AnalysisStatus> {
        self.wait_for_completion_with(analysis_id, DEFAULT_POLL_INTERVAL, DEFAULT_MAX_ATTEMPTS)
            .await
    }

    /// Poll the analysis status until it completes or fails.
    ///
    /// A simple bounded loop: each attempt fetches the status and sleeps
    /// `poll_interval` when the analysis is still running. After
    /// `max_attempts` polls an [`Error::Timeout`] is raised with the
    /// fixed code `timeout`.
    pub async fn wait_for_completion_with(
        &self,
        analysis_id: &str,
        poll_interval: Duration,
        max_attempts: u32,
    ) -> Result<AnalysisStatus> {
        for attempt in 0..max_attempts {
            let result = self.status(analysis_id).await?;

            if result.is_complete() || result.is_failed() {
                return Ok(result);
            }

            debug!(analysis_id, attempt, status = %result.status, "still running");
            sleep(poll_interval).await;
        }

        Err(Error::Timeout {
            message: format!(
                "Analysis {} did not complete within {} seconds",
                analysis_id,
                poll_interval.as_secs() * u64::from(max_attempts)
            ),
        })
    }
}
