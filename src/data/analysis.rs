use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State of a submitted page analysis.
///
/// Returned both when submitting an analysis and when polling its
/// status. `status` moves through `pending`/`processing` before landing
/// on `complete` or `failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStatus {
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub url: String,
    pub status_url: Option<String>,
    pub estimated_time_seconds: Option<i64>,
    pub completed_at: Option<String>,
    pub error_message: Option<String>,
    /// Analysis output, populated once complete.
    #[serde(default)]
    pub result: Map<String, Value>,
}

impl AnalysisStatus {
    /// The analysis finished successfully.
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }

    /// The analysis finished with an error.
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    /// The analysis has not finished yet.
    pub fn is_pending(&self) -> bool {
        self.status == "pending" || self.status == "processing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_helpers() {
        let mut status: AnalysisStatus = serde_json::from_value(json!({
            "analysis_id": "an-1",
            "status": "processing",
            "url": "https://example.com/",
        }))
        .unwrap();
        assert!(status.is_pending());
        assert!(!status.is_complete());
        assert!(!status.is_failed());

        status.status = "complete".to_string();
        assert!(status.is_complete());
        assert!(!status.is_pending());

        status.status = "failed".to_string();
        assert!(status.is_failed());
    }

    #[test]
    fn test_empty_payload_defaults() {
        let status: AnalysisStatus = serde_json::from_value(json!({})).unwrap();
        assert_eq!(status.analysis_id, "");
        assert_eq!(status.status, "");
        assert!(status.result.is_empty());
        assert!(!status.is_complete());
    }
}
