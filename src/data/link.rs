use serde::{Deserialize, Serialize};

/// An internal link placed (or suggested) between two pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub page_from: String,
    pub page_to: String,
    /// Anchor keyword the link was built around.
    pub keyword: Option<String>,
    pub impressions: Option<i64>,
    pub created_at: Option<String>,
}
