use serde::{Deserialize, Serialize};

/// A tracked keyword with market metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
    pub page_url: Option<String>,
    pub category: Option<String>,
    pub search_volume: Option<i64>,
    pub keyword_difficulty: Option<f64>,
    pub cpc: Option<f64>,
    pub competition: Option<f64>,
    /// Search volume inside AI answer engines.
    pub ai_search_volume: Option<i64>,
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hydrates_with_defaults() {
        let keyword: Keyword =
            serde_json::from_value(json!({"id": 2, "name": "seo audit"})).unwrap();
        assert_eq!(keyword.name, "seo audit");
        assert!(keyword.search_volume.is_none());
        assert!(keyword.cpc.is_none());
    }
}
