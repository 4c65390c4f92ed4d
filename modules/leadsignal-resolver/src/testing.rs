// Test mocks for the resolver's two trait boundaries. Both record their
// calls so tests can assert "blocked means no fetch happened".

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use serper_client::SearchItem;

use crate::traits::{EvidenceSearch, PageFetcher};

pub struct MockEvidenceSearch {
    responses: Vec<(String, Vec<SearchItem>)>,
    calls: Mutex<Vec<String>>,
}

impl MockEvidenceSearch {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return these items for any query containing `fragment`.
    pub fn on_query_containing(mut self, fragment: &str, items: Vec<SearchItem>) -> Self {
        self.responses.push((fragment.to_string(), items));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEvidenceSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EvidenceSearch for MockEvidenceSearch {
    async fn search(&self, query: &str, _max_results: usize) -> Result<Vec<SearchItem>> {
        self.calls.lock().unwrap().push(query.to_string());
        let mut out = Vec::new();
        for (fragment, items) in &self.responses {
            if query.contains(fragment.as_str()) {
                out.extend(items.iter().cloned());
            }
        }
        Ok(out)
    }
}

pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    fail_all: bool,
    calls: Mutex<Vec<String>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Every fetch fails, simulating timeouts/unreachable hosts.
    pub fn failing() -> Self {
        Self {
            pages: HashMap::new(),
            fail_all: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.fail_all {
            bail!("mock fetch failure for {url}");
        }
        match self.pages.get(url) {
            Some(html) => Ok(html.clone()),
            None => bail!("no page registered for {url}"),
        }
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
