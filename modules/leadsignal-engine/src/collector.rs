// Evidence collection: execute a query plan against the search provider
// as a bounded sequence of calls with a fixed courtesy delay between them.
//
// One failed (query, source) pair never aborts the batch: it logs a
// warning, counts as a failure, and contributes zero evidence.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, warn};

use leadsignal_common::EvidenceItem;

use crate::planner::PlannedQuery;
use crate::sources;
use crate::traits::SearchProvider;

/// Counters for one collection pass. `queries_failed == queries_executed`
/// with a non-empty plan means the provider was unreachable for the whole
/// run; the caller decides whether that is fatal.
#[derive(Debug, Default, Clone)]
pub struct CollectorStats {
    pub queries_executed: u32,
    pub queries_failed: u32,
    pub sources_checked: u32,
    pub evidence_collected: u32,
}

pub struct EvidenceCollector<'a> {
    provider: &'a dyn SearchProvider,
    delay: Duration,
    max_results: usize,
}

impl<'a> EvidenceCollector<'a> {
    pub fn new(provider: &'a dyn SearchProvider, delay: Duration, max_results: usize) -> Self {
        Self {
            provider,
            delay,
            max_results,
        }
    }

    /// Run every planned query in order, tagging each result row with the
    /// plan's source category and weight.
    pub async fn collect(&self, plan: &[PlannedQuery]) -> (Vec<EvidenceItem>, CollectorStats) {
        let mut evidence = Vec::new();
        let mut stats = CollectorStats::default();
        let mut categories_seen = HashSet::new();

        for (i, planned) in plan.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }

            stats.queries_executed += 1;
            categories_seen.insert(planned.category);

            let items = match self
                .provider
                .search(&planned.query, self.max_results, Some(planned.recency))
                .await
            {
                Ok(items) => items,
                Err(e) => {
                    stats.queries_failed += 1;
                    warn!(
                        query = planned.query.as_str(),
                        category = %planned.category,
                        error = %e,
                        "Search call failed, skipping this (query, source) pair"
                    );
                    continue;
                }
            };

            debug!(
                query = planned.query.as_str(),
                category = %planned.category,
                count = items.len(),
                "Collected search results"
            );

            let weight = sources::weight(planned.category);
            for item in items {
                evidence.push(EvidenceItem {
                    title: item.title,
                    snippet: item.snippet,
                    link: item.link,
                    source_category: planned.category,
                    source_weight: weight,
                    date: item.date,
                    position: item.position,
                    query_used: planned.query.clone(),
                });
            }
        }

        stats.sources_checked = categories_seen.len() as u32;
        stats.evidence_collected = evidence.len() as u32;
        (evidence, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner;
    use crate::testing::MockSearchProvider;
    use serper_client::SearchItem;

    fn item(title: &str, link: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            snippet: String::new(),
            link: link.to_string(),
            date: None,
            position: None,
        }
    }

    #[tokio::test]
    async fn tags_evidence_with_category_and_weight() {
        let provider = MockSearchProvider::new()
            .on_query_containing("expansion", vec![item("Acme expands", "https://reuters.com/a")]);
        let collector = EvidenceCollector::new(&provider, Duration::ZERO, 10);
        let plan = planner::plan("Acme", &[]);

        let (evidence, stats) = collector.collect(&plan).await;

        assert!(!evidence.is_empty());
        let first = &evidence[0];
        assert_eq!(first.source_weight, sources::weight(first.source_category));
        assert!(first.query_used.contains("Acme"));
        assert_eq!(stats.queries_executed as usize, plan.len());
        assert_eq!(stats.queries_failed, 0);
    }

    #[tokio::test]
    async fn failed_call_skips_pair_and_continues() {
        let provider = MockSearchProvider::new()
            .fail_query_containing("expansion")
            .on_query_containing("hiring", vec![item("Acme hiring", "https://indeed.com/x")]);
        let collector = EvidenceCollector::new(&provider, Duration::ZERO, 10);
        let plan = planner::plan("Acme", &[]);

        let (evidence, stats) = collector.collect(&plan).await;

        assert!(stats.queries_failed > 0);
        assert!(stats.queries_failed < stats.queries_executed);
        assert!(evidence.iter().any(|e| e.title == "Acme hiring"));
    }
}
