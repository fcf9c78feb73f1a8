//! USGS earthquake feed client
//!
//! This module downloads the raw GeoJSON summary feeds. Bodies are returned
//! verbatim so they can be cached byte-for-byte.

use std::time::Duration;

use reqwest::Client;

/// Base URL for the USGS summary feeds
pub const USGS_FEED_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Client for downloading feed documents
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new FeedClient whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the raw body at `url`
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The response body, unmodified
    /// * `Err(reqwest::Error)` - On connection failure, timeout, or a non-2xx status
    pub async fn fetch_bytes(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Joins a feed base URL and a feed file name
pub fn feed_url(base_url: &str, feed_file: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), feed_file)
}
