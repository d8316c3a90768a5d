use bytes::Bytes;
use serde_json::{json, Value};

use super::hydrate;
use crate::data::{PaginatedResult, ReportDetail, ReportSummary, ReportType};
use crate::error::Result;
use crate::http::HttpClient;

/// Access to periodic reports for one domain.
#[derive(Debug)]
pub struct ReportResource<'a> {
    http: &'a HttpClient,
    domain: String,
}

impl<'a> ReportResource<'a> {
    /// Create a resource scoped to `domain`.
    pub fn new(http: &'a HttpClient, domain: impl Into<String>) -> Self {
        ReportResource {
            http,
            domain: domain.into(),
        }
    }

    /// List generated reports.
    pub async fn list(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<PaginatedResult<ReportSummary>> {
        let data = self
            .http
            .get(
                &format!("websites/{}/reports/", self.domain),
                &[
                    ("page", Value::from(page)),
                    ("page_size", Value::from(page_size)),
                ],
            )
            .await?;
        PaginatedResult::from_value(data)
    }

    /// Fetch one report with its payload.
    pub async fn get(&self, report_id: i64) -> Result<ReportDetail> {
        let data = self
            .http
            .get(
                &format!("websites/{}/reports/{}/", self.domain, report_id),
                &[],
            )
            .await?;
        hydrate(data)
    }

    /// Download the rendered PDF for a report.
    pub async fn download_pdf(&self, report_id: i64) -> Result<Bytes> {
        self.http
            .get_raw(
                &format!("websites/{}/reports/{}/pdf/", self.domain, report_id),
                &[],
            )
            .await
    }

    /// Request generation of a new report.
    ///
    /// Returns the raw acknowledgement payload.
    pub async fn create(&self, report_type: ReportType) -> Result<Value> {
        self.http
            .post(
                &format!("websites/{}/reports/", self.domain),
                &json!({ "type": report_type.as_str() }),
            )
            .await
    }
}
