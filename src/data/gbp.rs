use serde::{Deserialize, Serialize};

/// A Google Business Profile location linked to the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbpLocation {
    pub id: i64,
    pub location_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: i64,
    pub last_fetched_at: Option<String>,
}

/// A customer review on a Business Profile location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbpReview {
    pub id: i64,
    pub review_id: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub rating: i64,
    pub comment: Option<String>,
    pub reply: Option<String>,
    /// Generated reply draft, if one exists.
    pub reply_suggestion: Option<String>,
    pub sentiment: Option<String>,
    #[serde(default)]
    pub needs_attention: bool,
    #[serde(default)]
    pub auto_replied: bool,
    pub published_at: Option<String>,
    pub reply_posted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_hydrates() {
        let location: GbpLocation = serde_json::from_value(json!({
            "id": 1,
            "location_id": "loc-123",
            "name": "Main Store",
            "average_rating": 4.6,
            "total_reviews": 210,
        }))
        .unwrap();
        assert_eq!(location.name, "Main Store");
        assert_eq!(location.average_rating, Some(4.6));
    }

    #[test]
    fn test_review_defaults() {
        let review: GbpReview =
            serde_json::from_value(json!({"id": 2, "review_id": "rv-9"})).unwrap();
        assert_eq!(review.rating, 0);
        assert!(!review.needs_attention);
        assert!(review.reply_suggestion.is_none());
    }
}
