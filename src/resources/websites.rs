use super::{hydrate, unwrap_results};
use crate::data::Website;
use crate::error::Result;
use crate::http::HttpClient;

/// Access to the account's registered websites.
#[derive(Debug)]
pub struct WebsiteResource<'a> {
    http: &'a HttpClient,
}

impl<'a> WebsiteResource<'a> {
    /// Create a resource over the given transport.
    pub fn new(http: &'a HttpClient) -> Self {
        WebsiteResource { http }
    }

    /// List all registered websites.
    ///
    /// Accepts both the `{"results": [...]}` envelope and a bare array.
    pub async fn list(&self) -> Result<Vec<Website>> {
        let data = self.http.get("websites/", &[]).await?;
        hydrate(unwrap_results(data))
    }

    /// Fetch one website by domain.
    pub async fn get(&self, domain: &str) -> Result<Website> {
        let data = self
            .http
            .get(&format!("websites/{}/", domain), &[])
            .await?;
        hydrate(data)
    }
}
