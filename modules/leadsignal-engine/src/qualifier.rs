// Qualification orchestrator: plan -> collect -> extract -> fit -> classify.
//
// One logical request-response invocation. No state survives between runs;
// all intermediate structures are append-only within the run.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use leadsignal_common::{
    CompanyProfile, Config, LeadSignalError, Product, QualificationReport,
};
use serper_client::SerperClient;

use crate::classifier;
use crate::collector::EvidenceCollector;
use crate::fit;
use crate::leadership;
use crate::planner;
use crate::signals::{self, KeywordMatcher};
use crate::traits::SearchProvider;

/// Per-run counters, logged once at completion.
#[derive(Debug, Default, Clone)]
pub struct QualifyStats {
    pub queries_executed: u32,
    pub queries_failed: u32,
    pub sources_checked: u32,
    pub evidence_collected: u32,
    pub signals_extracted: u32,
    pub leadership_found: u32,
    pub fit_score: u8,
    pub final_score: u8,
}

impl std::fmt::Display for QualifyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Qualification Run Complete ===")?;
        writeln!(f, "Queries executed:   {}", self.queries_executed)?;
        writeln!(f, "Queries failed:     {}", self.queries_failed)?;
        writeln!(f, "Sources checked:    {}", self.sources_checked)?;
        writeln!(f, "Evidence collected: {}", self.evidence_collected)?;
        writeln!(f, "Signals extracted:  {}", self.signals_extracted)?;
        writeln!(f, "Leadership found:   {}", self.leadership_found)?;
        writeln!(f, "Fit score:          {}", self.fit_score)?;
        writeln!(f, "Final score:        {}", self.final_score)
    }
}

pub struct Qualifier {
    provider: Arc<dyn SearchProvider>,
    delay: Duration,
    max_results: usize,
}

impl Qualifier {
    pub fn new(provider: Arc<dyn SearchProvider>, delay: Duration, max_results: usize) -> Self {
        Self {
            provider,
            delay,
            max_results,
        }
    }

    /// Build a qualifier backed by the real search client. Missing
    /// credentials fail here, fast and loud, before any query is planned.
    pub fn from_config(config: &Config) -> Result<Self, LeadSignalError> {
        if config.serper_api_key.trim().is_empty() {
            return Err(LeadSignalError::Config(
                "SERPER_API_KEY is not set; the qualification engine cannot gather evidence"
                    .to_string(),
            ));
        }
        let client = SerperClient::with_timeout(
            &config.serper_api_key,
            Duration::from_secs(config.search_timeout_secs),
        );
        Ok(Self::new(
            Arc::new(client),
            Duration::from_millis(config.search_delay_ms),
            config.max_results_per_query,
        ))
    }

    /// Run the full qualification pipeline for one company.
    pub async fn qualify(
        &self,
        company_name: &str,
        profile: Option<CompanyProfile>,
        products: &[Product],
    ) -> Result<QualificationReport, LeadSignalError> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(LeadSignalError::InvalidInput(
                "company_name is required".to_string(),
            ));
        }

        let started = Instant::now();
        info!(company = company_name, "Qualification run starting");

        let plan = planner::plan(company_name, products);
        let collector = EvidenceCollector::new(self.provider.as_ref(), self.delay, self.max_results);
        let (evidence, collect_stats) = collector.collect(&plan).await;

        // Every single call failing means the provider was unreachable for
        // the whole run; that is not partial evidence, it is an outage.
        if collect_stats.queries_executed > 0
            && collect_stats.queries_failed == collect_stats.queries_executed
        {
            return Err(LeadSignalError::Upstream(format!(
                "all {} search calls failed; no evidence could be gathered",
                collect_stats.queries_executed
            )));
        }

        let extracted = signals::extract_signals(&evidence, &KeywordMatcher);
        let contacts = leadership::extract_leadership(&evidence);

        let default_profile;
        let profile_ref = match &profile {
            Some(p) => p,
            None => {
                default_profile = CompanyProfile {
                    name: company_name.to_string(),
                    ..Default::default()
                };
                &default_profile
            }
        };
        let fit_report = fit::score_catalog(products, profile_ref);

        let classification = classifier::classify(&extracted, fit_report.aggregate_score);

        let stats = QualifyStats {
            queries_executed: collect_stats.queries_executed,
            queries_failed: collect_stats.queries_failed,
            sources_checked: collect_stats.sources_checked,
            evidence_collected: collect_stats.evidence_collected,
            signals_extracted: extracted.len() as u32,
            leadership_found: contacts.len() as u32,
            fit_score: fit_report.aggregate_score,
            final_score: classification.score,
        };
        info!(company = company_name, "{stats}");

        Ok(QualificationReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            classification,
            product_fit: fit_report,
            dnb_leadership: contacts,
            evidences: evidence,
            sources_checked: stats.sources_checked,
            queries_executed: stats.queries_executed,
            execution_time_ms: started.elapsed().as_millis() as u64,
        })
    }
}
