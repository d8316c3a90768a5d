use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A competing domain with overlap metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: i64,
    pub domain: String,
    #[serde(default)]
    pub score: f64,
    /// Number of keywords both domains rank for.
    #[serde(default)]
    pub intersections: i64,
    #[serde(default)]
    pub estimated_traffic: i64,
    #[serde(default)]
    pub content_gaps_count: i64,
    #[serde(default)]
    pub avg_position: f64,
    #[serde(default)]
    pub top_keywords: Vec<Value>,
    /// Trend series, present only when requested.
    pub trends: Option<Value>,
}
