use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::link::Link;

/// A crawled page with its scores and on-page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub page_type: Option<String>,
    pub seo_score: Option<f64>,
    pub accessibility_score: Option<f64>,
    pub onpage_score: Option<f64>,
    pub conversion_score: Option<f64>,
    pub meta_description: Option<String>,
    pub language_code: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    #[serde(default)]
    pub readability: Map<String, Value>,
    #[serde(default)]
    pub structured_data: Map<String, Value>,
    /// Internal links originating from this page.
    #[serde(default)]
    pub links: Vec<Link>,
    pub created_at: Option<String>,
    pub last_processed_at: Option<String>,
}

/// A keyword tracked against one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageKeyword {
    pub id: i64,
    pub keyword: String,
    pub processed_at: Option<String>,
    /// Raw ranking stats as returned by the API.
    pub stats: Option<Value>,
}

/// One day of search-console stats for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub date: Option<String>,
    pub clicks: Option<i64>,
    pub impressions: Option<i64>,
    pub ctr: Option<f64>,
    pub rank: Option<f64>,
}

/// A snapshot in a page's metric history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsHistory {
    pub created_at: Option<String>,
    pub seo_score: Option<f64>,
    pub onpage_score: Option<f64>,
    pub accessibility_score: Option<f64>,
    pub word_count: Option<i64>,
    pub gsc_clicks: Option<i64>,
    pub gsc_impressions: Option<i64>,
    pub gsc_avg_position: Option<f64>,
    pub gsc_ctr: Option<f64>,
    #[serde(default)]
    pub is_orphan: bool,
    pub total_incoming_links: Option<i64>,
    pub total_outgoing_links: Option<i64>,
    pub cwv_lcp: Option<f64>,
    pub cwv_cls: Option<f64>,
    pub cwv_fid: Option<f64>,
    pub cwv_performance_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_hydrates_nested_links() {
        let page: Page = serde_json::from_value(json!({
            "id": 7,
            "url": "https://example.com/about",
            "title": "About",
            "seo_score": 72.0,
            "links": [
                {"page_from": "/about", "page_to": "/team", "keyword": "our team"},
            ],
        }))
        .unwrap();

        assert_eq!(page.id, 7);
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].keyword.as_deref(), Some("our team"));
    }

    #[test]
    fn test_page_minimal_payload() {
        let page: Page =
            serde_json::from_value(json!({"id": 1, "url": "https://example.com/"})).unwrap();
        assert!(page.title.is_none());
        assert!(page.links.is_empty());
        assert!(page.readability.is_empty());
    }

    #[test]
    fn test_metrics_history_orphan_defaults_false() {
        let entry: MetricsHistory = serde_json::from_value(json!({})).unwrap();
        assert!(!entry.is_orphan);
        assert!(entry.seo_score.is_none());
    }
}
