use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic the site does not cover but competitors rank for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGap {
    pub id: i64,
    #[serde(default)]
    pub page_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub seo_potential: f64,
    #[serde(default)]
    pub total_search_volume: i64,
    #[serde(default)]
    pub keywords: Vec<Value>,
    #[serde(default)]
    pub aiso_driven: bool,
    #[serde(default)]
    pub is_generated: bool,
    #[serde(default)]
    pub has_potential_candidate: bool,
}

/// An alert for a page losing traffic or rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDecayAlert {
    pub id: i64,
    pub page_url: Option<String>,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub decay_type: String,
    pub clicks_previous: Option<i64>,
    pub clicks_current: Option<i64>,
    pub impressions_previous: Option<i64>,
    pub impressions_current: Option<i64>,
    pub position_previous: Option<f64>,
    pub position_current: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub detected_at: String,
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<Value>,
}
