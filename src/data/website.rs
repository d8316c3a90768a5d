use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A website registered with the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    /// Registered domain, e.g. `example.com`.
    pub domain: String,
    pub platform: Option<String>,
    pub industry: Option<String>,
    pub seo_score: Option<f64>,
    /// Per-category scores keyed by category name.
    #[serde(default)]
    pub scores: Map<String, Value>,
    /// Headline KPI values keyed by metric name.
    #[serde(default)]
    pub kpis: Map<String, Value>,
    pub created_at: Option<String>,
    pub last_processed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hydrates_from_full_payload() {
        let website: Website = serde_json::from_value(json!({
            "domain": "example.com",
            "platform": "wordpress",
            "industry": "retail",
            "seo_score": 85.5,
            "scores": {"onpage": 90},
            "kpis": {"clicks": 1200},
            "created_at": "2025-01-01T00:00:00Z",
            "last_processed_at": "2025-06-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(website.domain, "example.com");
        assert_eq!(website.seo_score, Some(85.5));
        assert_eq!(website.scores["onpage"], json!(90));
    }

    #[test]
    fn test_optional_fields_default() {
        let website: Website =
            serde_json::from_value(json!({"domain": "example.com"})).unwrap();
        assert!(website.platform.is_none());
        assert!(website.seo_score.is_none());
        assert!(website.scores.is_empty());
        assert!(website.kpis.is_empty());
    }
}
