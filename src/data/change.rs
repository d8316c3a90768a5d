use serde::{Deserialize, Serialize};

/// A proposed or applied on-page change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub id: i64,
    #[serde(default)]
    pub change_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub risk_level: String,
    pub page_url: Option<String>,
    pub proposed_value: Option<String>,
    pub previous_value: Option<String>,
    pub reason: Option<String>,
    pub confidence_score: Option<f64>,
    pub created_at: Option<String>,
}
