//! End-to-end qualification scenarios driven through MockSearchProvider.
//! No network, no credentials; deterministic pipeline runs.

use std::sync::Arc;
use std::time::Duration;

use leadsignal_common::{
    CompanyProfile, DistributionModel, LeadSignalError, LeadStatus, Product, TargetSize,
};
use leadsignal_engine::testing::{search_item, FailingSearchProvider, MockSearchProvider};
use leadsignal_engine::Qualifier;

fn qualifier(provider: MockSearchProvider) -> Qualifier {
    Qualifier::new(Arc::new(provider), Duration::ZERO, 10)
}

fn catalog() -> Vec<Product> {
    vec![Product {
        id: "p1".to_string(),
        name: "HydroPump X".to_string(),
        category: "hydraulic pumps".to_string(),
        industry: Some("Industrial Equipment".to_string()),
        target_size: Some(TargetSize::Mid),
        distribution_model: Some(DistributionModel::Distributor),
        regions: vec!["Brazil".to_string()],
    }]
}

fn strong_profile() -> CompanyProfile {
    CompanyProfile {
        name: "Acme Distribuidora".to_string(),
        industry: Some("Industrial Equipment".to_string()),
        employee_count: Some(120),
        description: Some("B2B distributor of hydraulic equipment and pumps".to_string()),
        website: None,
        country: Some("Brazil".to_string()),
        state: None,
        business_model: Some(DistributionModel::Distributor),
    }
}

#[tokio::test]
async fn empty_evidence_and_catalog_is_cold_low() {
    // Scenario: nothing found anywhere. Must be an explicit cold verdict,
    // not an error and not an empty explanation.
    let q = qualifier(MockSearchProvider::new());
    let report = q.qualify("Ghost Co", None, &[]).await.unwrap();

    assert_eq!(report.classification.score, 0);
    assert_eq!(report.classification.status, LeadStatus::Cold);
    assert!(!report.classification.explanation.is_empty());
    assert!(report
        .classification
        .explanation
        .to_lowercase()
        .contains("no"));
    assert!(report.evidences.is_empty());
    assert!(report.dnb_leadership.is_empty());
    assert_eq!(report.product_fit.aggregate_score, 0);
}

#[tokio::test]
async fn expansion_signals_plus_strong_fit_is_warm() {
    // Three high-relevance expansion hits (premium news, weight 90) and a
    // fit score >= 70: 25 + 15 = 40 -> warm.
    let provider = MockSearchProvider::new().on_query_containing(
        "expansion",
        vec![
            search_item(
                "Acme announces expansion",
                "new facility in Curitiba",
                "https://reuters.com/acme-1",
            ),
            search_item(
                "Acme expands south",
                "opening a new warehouse",
                "https://bloomberg.com/acme-2",
            ),
            search_item(
                "Acme enters new market",
                "expansion into Chile",
                "https://ft.com/acme-3",
            ),
        ],
    );
    let q = qualifier(provider);
    let report = q
        .qualify("Acme", Some(strong_profile()), &catalog())
        .await
        .unwrap();

    assert!(report.product_fit.aggregate_score >= 70);
    assert_eq!(report.classification.status, LeadStatus::Warm);
    assert_eq!(report.classification.score, 40);
}

#[tokio::test]
async fn report_keeps_full_evidence_trail() {
    let provider = MockSearchProvider::new().on_query_containing(
        "hiring",
        vec![search_item(
            "Acme hiring 50",
            "now hiring sales engineers",
            "https://indeed.com/acme",
        )],
    );
    let q = qualifier(provider);
    let report = q.qualify("Acme", None, &[]).await.unwrap();

    assert!(!report.evidences.is_empty());
    for e in &report.evidences {
        assert!(!e.link.is_empty());
        assert!(!e.query_used.is_empty());
    }
    assert!(report.queries_executed > 0);
    assert!(report.sources_checked > 0);
}

#[tokio::test]
async fn leadership_extracted_from_bi_sources() {
    let provider = MockSearchProvider::new().on_query_containing(
        "management team",
        vec![search_item(
            "Acme Corp company profile",
            "CEO John Smith and Maria Santos, Managing Director",
            "https://dnb.com/acme",
        )],
    );
    let q = qualifier(provider);
    let report = q.qualify("Acme", None, &[]).await.unwrap();

    let names: Vec<&str> = report
        .dnb_leadership
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert!(names.contains(&"John Smith"));
    assert!(names.contains(&"Maria Santos"));
}

#[tokio::test]
async fn blank_company_name_rejected_before_any_call() {
    let provider = MockSearchProvider::new();
    let q = Qualifier::new(Arc::new(provider), Duration::ZERO, 10);
    let err = q.qualify("   ", None, &[]).await.unwrap_err();
    assert!(matches!(err, LeadSignalError::InvalidInput(_)));
}

#[tokio::test]
async fn total_outage_is_upstream_error_not_cold_lead() {
    let q = Qualifier::new(Arc::new(FailingSearchProvider), Duration::ZERO, 10);
    let err = q.qualify("Acme", None, &[]).await.unwrap_err();
    assert!(matches!(err, LeadSignalError::Upstream(_)));
}

#[tokio::test]
async fn partial_failures_still_produce_a_report() {
    let provider = MockSearchProvider::new()
        .fail_query_containing("expansion")
        .fail_query_containing("procurement")
        .on_query_containing(
            "hiring",
            vec![search_item(
                "Acme hiring",
                "vacancies open",
                "https://indeed.com/acme",
            )],
        );
    let q = qualifier(provider);
    let report = q.qualify("Acme", None, &[]).await.unwrap();

    assert!(!report.evidences.is_empty());
    assert!(report.classification.signals_detected > 0);
}
