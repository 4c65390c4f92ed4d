// Trait abstractions for the resolver's two external dependencies.
//
// EvidenceSearch: web search for location evidence (shares the Serper
// client with the qualification engine, but needs no recency filter).
// PageFetcher: raw HTML fetch of the company page.
//
// Both have HashMap-backed mocks in `testing` so the priority chain is
// testable with no network.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use serper_client::{SearchItem, SerperClient};

#[async_trait]
pub trait EvidenceSearch: Send + Sync {
    /// Run one web search query, no recency restriction.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchItem>>;
}

#[async_trait]
impl EvidenceSearch for SerperClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchItem>> {
        Ok(SerperClient::search(self, query, max_results, None).await?)
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch raw HTML for a URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain reqwest fetcher with a short timeout. Identity resolution only
/// needs the server-rendered markup; no headless browser involved.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Page fetch failed")?;
        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Page fetch returned status {status}");
        }
        Ok(resp.text().await.context("Page body read failed")?)
    }
}
