use crate::models::Property;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches a JSON array of listings from a remote feed
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("listing-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listing feed")?;

        if !response.status().is_success() {
            warn!("Listing feed returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listing feed: {}", response.status());
        }

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to decode listing feed")?;

        info!("🌐 Fetched {} listings from {}", properties.len(), self.url);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "HTTP feed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_url() {
        let source = HttpSource::new("https://example.com/listings.json").unwrap();

        assert_eq!(source.url(), "https://example.com/listings.json");
        assert_eq!(source.source_name(), "HTTP feed");
    }

    #[tokio::test]
    async fn unreachable_feed_is_an_error() {
        // .invalid never resolves
        let source = HttpSource::new("http://listings.invalid/feed.json").unwrap();

        assert!(source.load().await.is_err());
    }
}
