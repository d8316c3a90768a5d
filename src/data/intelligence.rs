use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Headline intelligence metrics for a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceSummary {
    pub domain: String,
    #[serde(default)]
    pub seo_score: f64,
    #[serde(default)]
    pub aiso_score: f64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_clusters: i64,
    #[serde(default)]
    pub total_internal_links: i64,
    #[serde(default)]
    pub orphan_pages: i64,
    #[serde(default)]
    pub content_gaps: i64,
    pub last_crawled_at: Option<String>,
    /// Score history, present only when requested.
    pub history: Option<Value>,
    /// Trend deltas, present only when requested.
    pub trends: Option<Value>,
}

/// Internal-link topology of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_internal_links: i64,
    #[serde(default)]
    pub orphan_pages_count: i64,
    #[serde(default)]
    pub orphan_pages: Vec<Value>,
    #[serde(default)]
    pub link_depth_distribution: Map<String, Value>,
    #[serde(default)]
    pub avg_links_per_page: f64,
    #[serde(default)]
    pub most_linked_pages: Vec<Value>,
}

/// Lab speed measurement for a single URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpeed {
    pub url: String,
    pub loading_time: Option<f64>,
    #[serde(default)]
    pub core_web_vitals: Map<String, Value>,
    #[serde(default)]
    pub scores: Map<String, Value>,
    #[serde(default)]
    pub resource_sizes: Map<String, Value>,
    pub measured_at: Option<String>,
}

/// AI-search-optimization metrics: how often the domain is mentioned by
/// AI answer engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisoData {
    #[serde(default)]
    pub aiso_score: f64,
    #[serde(default)]
    pub sub_scores: Map<String, Value>,
    #[serde(default)]
    pub total_mentions: i64,
    #[serde(default)]
    pub your_mentions: i64,
    #[serde(default)]
    pub avg_position: f64,
    #[serde(default)]
    pub positive_rate: f64,
    #[serde(default)]
    pub providers: Vec<Value>,
    pub history: Option<Value>,
}
