// Test mocks for the qualification pipeline.
//
// MockSearchProvider matches queries by substring so tests don't have to
// reproduce the planner's full site-scoped query strings. Unmatched
// queries return empty results; registered failures return errors.
// Every call is recorded for call-count assertions.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use serper_client::{Recency, SearchItem};

use crate::traits::SearchProvider;

pub struct MockSearchProvider {
    responses: Vec<(String, Vec<SearchItem>)>,
    failures: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            failures: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return these items for any query containing `fragment`.
    pub fn on_query_containing(mut self, fragment: &str, items: Vec<SearchItem>) -> Self {
        self.responses.push((fragment.to_string(), items));
        self
    }

    /// Fail any query containing `fragment`.
    pub fn fail_query_containing(mut self, fragment: &str) -> Self {
        self.failures.push(fragment.to_string());
        self
    }

    /// Queries issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(
        &self,
        query: &str,
        _max_results: usize,
        _recency: Option<Recency>,
    ) -> Result<Vec<SearchItem>> {
        self.calls.lock().unwrap().push(query.to_string());

        if self.failures.iter().any(|f| query.contains(f.as_str())) {
            bail!("mock failure for query: {query}");
        }

        let mut out = Vec::new();
        for (fragment, items) in &self.responses {
            if query.contains(fragment.as_str()) {
                out.extend(items.iter().cloned());
            }
        }
        Ok(out)
    }
}

/// Shorthand for building search items in tests.
pub fn search_item(title: &str, snippet: &str, link: &str) -> SearchItem {
    SearchItem {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
        date: None,
        position: None,
    }
}

/// A provider whose every call fails, simulating a full outage.
pub struct FailingSearchProvider;

#[async_trait]
impl SearchProvider for FailingSearchProvider {
    async fn search(
        &self,
        _query: &str,
        _max_results: usize,
        _recency: Option<Recency>,
    ) -> Result<Vec<SearchItem>> {
        bail!("provider unreachable")
    }
}
