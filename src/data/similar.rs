use serde::{Deserialize, Serialize};

/// The page a similarity search was run against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimilarSource {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// A page ranked by content similarity to the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPage {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub similarity: f64,
    pub cluster: Option<String>,
}

/// Result of a similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPagesResult {
    #[serde(default)]
    pub source: SimilarSource,
    #[serde(default)]
    pub similar_pages: Vec<SimilarPage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hydrates_pages_in_order() {
        let result: SimilarPagesResult = serde_json::from_value(json!({
            "source": {"url": "/a", "title": "A"},
            "similar_pages": [
                {"url": "/b", "title": "B", "similarity": 0.91},
                {"url": "/c", "title": "C", "similarity": 0.74, "cluster": "docs"},
            ],
        }))
        .unwrap();
        assert_eq!(result.source.url, "/a");
        assert_eq!(result.similar_pages.len(), 2);
        assert_eq!(result.similar_pages[1].cluster.as_deref(), Some("docs"));
    }

    #[test]
    fn test_missing_source_defaults_empty() {
        let result: SimilarPagesResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.source, SimilarSource::default());
        assert!(result.similar_pages.is_empty());
    }
}
