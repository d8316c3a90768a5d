use serde::{Deserialize, Serialize};

/// An external link pointing at the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlink {
    pub id: i64,
    pub source_url: String,
    pub target_url: String,
    pub anchor_text: Option<String>,
    pub status: Option<String>,
    pub link_type: Option<String>,
    #[serde(default)]
    pub dofollow: bool,
    #[serde(default)]
    pub nofollow: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_lost: bool,
    pub page_from_rank: Option<i64>,
    pub first_discovered_at: Option<String>,
    pub last_crawled_at: Option<String>,
}

/// A referring domain aggregated across its backlinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklinkDomain {
    pub id: i64,
    pub domain: String,
    pub rank: Option<i64>,
    pub spam_score: Option<f64>,
    pub country: Option<String>,
    pub platform: Option<String>,
    pub tld: Option<String>,
}
