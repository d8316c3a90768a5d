//! Typed records hydrated from API responses.
//!
//! Every record deserializes from the generic JSON value returned by the
//! transport. Fields absent on the wire fall back to their documented
//! defaults; unrecognized fields are ignored. All records are plain
//! immutable values with no behavior beyond a few status helpers.

mod accessibility;
mod analysis;
mod backlink;
mod change;
mod cluster;
mod competitor;
mod content;
mod enums;
mod gbp;
mod intelligence;
mod keyword;
mod link;
mod page;
mod pagination;
mod report;
mod similar;
mod website;

pub use accessibility::AccessibilityIssue;
pub use analysis::AnalysisStatus;
pub use backlink::{Backlink, BacklinkDomain};
pub use change::ChangeRecord;
pub use cluster::{ClusterDetail, ClusterSummary};
pub use competitor::Competitor;
pub use content::{ContentDecayAlert, ContentGap};
pub use enums::{Period, ReportType, RiskLevel};
pub use gbp::{GbpLocation, GbpReview};
pub use intelligence::{AisoData, IntelligenceSummary, PageSpeed, Topology};
pub use keyword::Keyword;
pub use link::Link;
pub use page::{MetricsHistory, Page, PageKeyword, SearchStats};
pub use pagination::{PaginatedResult, Pagination};
pub use report::{ReportDetail, ReportSummary};
pub use similar::{SimilarPage, SimilarPagesResult, SimilarSource};
pub use website::Website;
