use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Thin wrapper around a shared reqwest client.
///
/// Cloning is cheap and every clone shares one connection pool, so a
/// clone can be handed to each scoring task without extra coordination.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(format!(
                "wikirace/{} (https://github.com/wikirace/wikirace)",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .pool_max_idle_per_host(50) // Connection pooling
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a page and return its body. Non-success status codes count
    /// as fetch failures.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
