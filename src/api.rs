//! Top-level client entry point.

use crate::config::Config;
use crate::http::HttpClient;
use crate::inject::SmartClient;
use crate::resources::{
    AccessibilityResource, AisoResource, AnalysisResource, BacklinkResource, ChangeResource,
    ClusterResource, CompetitorResource, ContentResource, GbpResource, IntelligenceResource,
    KeywordResource, LinkResource, PageResource, ReportResource, SimilarResource,
    WebsiteResource,
};

/// The SEOJuice API client.
///
/// Owns the authenticated transport and hands out domain-scoped resource
/// accessors. The client holds no mutable state after construction and
/// can be shared across tasks.
///
/// # Examples
///
/// ```ignore
/// use seojuice::SeoJuice;
///
/// let client = SeoJuice::new("sk-...");
/// let websites = client.websites().list().await?;
/// let summary = client
///     .intelligence("example.com")
///     .summary(Period::ThirtyDays, false, false)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SeoJuice {
    http: HttpClient,
    config: Config,
}

impl SeoJuice {
    /// Create a client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, Config::new())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: Config) -> Self {
        let http = HttpClient::new(api_key, config.clone());
        SeoJuice { http, config }
    }

    /// The underlying authenticated transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Registered websites.
    pub fn websites(&self) -> WebsiteResource<'_> {
        WebsiteResource::new(&self.http)
    }

    /// Crawled pages for `domain`.
    pub fn pages(&self, domain: impl Into<String>) -> PageResource<'_> {
        PageResource::new(&self.http, domain)
    }

    /// Internal links for `domain`.
    pub fn links(&self, domain: impl Into<String>) -> LinkResource<'_> {
        LinkResource::new(&self.http, domain)
    }

    /// Site-wide intelligence for `domain`.
    pub fn intelligence(&self, domain: impl Into<String>) -> IntelligenceResource<'_> {
        IntelligenceResource::new(&self.http, domain)
    }

    /// Topic clusters for `domain`.
    pub fn clusters(&self, domain: impl Into<String>) -> ClusterResource<'_> {
        ClusterResource::new(&self.http, domain)
    }

    /// Content gaps and decay alerts for `domain`.
    pub fn content(&self, domain: impl Into<String>) -> ContentResource<'_> {
        ContentResource::new(&self.http, domain)
    }

    /// Competitor overlap for `domain`.
    pub fn competitors(&self, domain: impl Into<String>) -> CompetitorResource<'_> {
        CompetitorResource::new(&self.http, domain)
    }

    /// AI-search-optimization metrics for `domain`.
    pub fn aiso(&self, domain: impl Into<String>) -> AisoResource<'_> {
        AisoResource::new(&self.http, domain)
    }

    /// On-demand page analysis for `domain`.
    pub fn analysis(&self, domain: impl Into<String>) -> AnalysisResource<'_> {
        AnalysisResource::new(&self.http, domain)
    }

    /// Periodic reports for `domain`.
    pub fn reports(&self, domain: impl Into<String>) -> ReportResource<'_> {
        ReportResource::new(&self.http, domain)
    }

    /// Tracked keywords for `domain`.
    pub fn keywords(&self, domain: impl Into<String>) -> KeywordResource<'_> {
        KeywordResource::new(&self.http, domain)
    }

    /// Backlinks and referring domains for `domain`.
    pub fn backlinks(&self, domain: impl Into<String>) -> BacklinkResource<'_> {
        BacklinkResource::new(&self.http, domain)
    }

    /// Accessibility issues for `domain`.
    pub fn accessibility(&self, domain: impl Into<String>) -> AccessibilityResource<'_> {
        AccessibilityResource::new(&self.http, domain)
    }

    /// Proposed on-page changes for `domain`.
    pub fn changes(&self, domain: impl Into<String>) -> ChangeResource<'_> {
        ChangeResource::new(&self.http, domain)
    }

    /// Business Profile locations and reviews for `domain`.
    pub fn gbp(&self, domain: impl Into<String>) -> GbpResource<'_> {
        GbpResource::new(&self.http, domain)
    }

    /// Content-similarity search for `domain`.
    pub fn similar(&self, domain: impl Into<String>) -> SimilarResource<'_> {
        SimilarResource::new(&self.http, domain)
    }

    /// A client for the smart suggestion service.
    pub fn smart(&self) -> SmartClient {
        SmartClient::new(self.config.clone())
    }
}
