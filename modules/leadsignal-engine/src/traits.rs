// Trait abstraction for the external search dependency.
//
// SearchProvider is the only thing the engine consumes from the outside:
// one call = one query + result count + recency filter, returning ranked
// items. The concrete impl is SerperClient; MockSearchProvider in
// `testing` enables deterministic tests with no network.

use anyhow::Result;
use async_trait::async_trait;

use serper_client::{Recency, SearchItem, SerperClient};

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one web search query against the external provider.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        recency: Option<Recency>,
    ) -> Result<Vec<SearchItem>>;
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        recency: Option<Recency>,
    ) -> Result<Vec<SearchItem>> {
        Ok(SerperClient::search(self, query, max_results, recency).await?)
    }
}
