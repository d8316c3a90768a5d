use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated report as listed by the reports endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: i64,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub type_display: String,
    #[serde(default)]
    pub status: String,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub has_pdf: bool,
}

/// Full report detail.
///
/// Carries the same header fields as [`ReportSummary`] plus the report
/// payload itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    pub id: i64,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub type_display: String,
    #[serde(default)]
    pub status: String,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub has_pdf: bool,
    pub summary: Option<Value>,
    pub data: Option<Value>,
    pub updated_at: Option<String>,
    pub pdf_url: Option<String>,
}
