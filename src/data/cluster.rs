use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic cluster as listed by the clusters endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub total_clicks: i64,
    #[serde(default)]
    pub avg_position: f64,
}

/// Full cluster detail, including keywords and time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub total_clicks: i64,
    #[serde(default)]
    pub avg_position: f64,
    #[serde(default)]
    pub top_keywords: Vec<Value>,
    #[serde(default)]
    pub time_series: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_defaults() {
        let cluster: ClusterSummary =
            serde_json::from_value(json!({"id": 3, "name": "pricing"})).unwrap();
        assert_eq!(cluster.slug, "");
        assert_eq!(cluster.page_count, 0);
        assert_eq!(cluster.avg_position, 0.0);
    }

    #[test]
    fn test_detail_carries_keywords() {
        let cluster: ClusterDetail = serde_json::from_value(json!({
            "id": 3,
            "name": "pricing",
            "top_keywords": ["saas pricing", "pricing page"],
        }))
        .unwrap();
        assert_eq!(cluster.top_keywords.len(), 2);
        assert!(cluster.time_series.is_empty());
    }
}
