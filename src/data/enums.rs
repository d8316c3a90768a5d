//! Request-parameter enums shared across resources.

use serde::{Deserialize, Serialize};

/// Reporting window for metrics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    /// Last 7 days.
    #[serde(rename = "7d")]
    SevenDays,
    /// Last 30 days.
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    /// Last 90 days.
    #[serde(rename = "90d")]
    NinetyDays,
}

impl Period {
    /// Wire representation of the period.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::NinetyDays => "90d",
        }
    }
}

/// Date range covered by a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// The current calendar month.
    #[default]
    ThisMonth,
    /// The previous calendar month.
    LastMonth,
    /// The current calendar week.
    ThisWeek,
    /// The previous calendar week.
    LastWeek,
}

impl ReportType {
    /// Wire representation of the report type.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::ThisMonth => "this_month",
            ReportType::LastMonth => "last_month",
            ReportType::ThisWeek => "this_week",
            ReportType::LastWeek => "last_week",
        }
    }
}

/// Risk classification attached to proposed changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Likely to affect rankings; review before applying.
    High,
    /// Moderate impact.
    Medium,
    /// Minor impact.
    Low,
    /// No expected ranking impact.
    Safe,
}

impl RiskLevel {
    /// Wire representation of the risk level.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Safe => "safe",
        }
    }
}
