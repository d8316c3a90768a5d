use serde::{Deserialize, Serialize};

/// A WCAG accessibility issue found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub id: i64,
    pub page_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub severity: String,
    pub wcag_criterion: Option<String>,
    pub description: Option<String>,
    pub fix_guidance: Option<String>,
    /// The offending HTML fragment.
    pub element_snippet: Option<String>,
    #[serde(default)]
    pub auto_fixable: bool,
    #[serde(default)]
    pub auto_fixed: bool,
    pub created_at: Option<String>,
}
