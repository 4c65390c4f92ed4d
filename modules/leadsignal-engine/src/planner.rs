// Phased query planning: for each signal category, a fixed set of query
// templates paired with a prioritized source subset and a recency window.
//
// Recency follows how fast each kind of information goes stale: most
// categories look back a year, financials two, leadership five (org charts
// change slowly).

use leadsignal_common::{Product, SourceCategory};
use serper_client::Recency;

use crate::sources;

/// Which planning phase emitted a query. Mostly mirrors `SignalType`,
/// plus the leadership lookup which feeds the leadership extractor
/// rather than the signal scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Expansion,
    Procurement,
    Hiring,
    Growth,
    Leadership,
    ProductFit,
}

/// One planned external search call.
#[derive(Debug, Clone)]
pub struct PlannedQuery {
    pub query: String,
    pub category: SourceCategory,
    pub recency: Recency,
    pub phase: QueryPhase,
}

const EXPANSION_TEMPLATES: &[&str] = &[
    "\"{c}\" expansion new facility",
    "\"{c}\" opens new office",
    "\"{c}\" enters new market",
];
const EXPANSION_SOURCES: &[SourceCategory] = &[
    SourceCategory::PremiumNews,
    SourceCategory::BusinessIntelligence,
];

const PROCUREMENT_TEMPLATES: &[&str] = &[
    "\"{c}\" procurement supplier contract",
    "\"{c}\" purchases equipment tender",
];
const PROCUREMENT_SOURCES: &[SourceCategory] =
    &[SourceCategory::PremiumNews, SourceCategory::TechPress];

const HIRING_TEMPLATES: &[&str] = &[
    "\"{c}\" hiring",
    "\"{c}\" jobs careers",
    "\"{c}\" recruiting sales engineers",
];
const HIRING_SOURCES: &[SourceCategory] =
    &[SourceCategory::JobBoard, SourceCategory::B2bSocial];

const GROWTH_TEMPLATES: &[&str] = &[
    "\"{c}\" revenue growth funding",
    "\"{c}\" annual report investment",
];
const GROWTH_SOURCES: &[SourceCategory] = &[
    SourceCategory::PremiumNews,
    SourceCategory::OfficialRegistry,
];

const LEADERSHIP_TEMPLATES: &[&str] = &[
    "\"{c}\" CEO executives directors",
    "\"{c}\" owner partner management team",
];
const LEADERSHIP_SOURCES: &[SourceCategory] = &[SourceCategory::BusinessIntelligence];

const PRODUCT_FIT_SOURCES: &[SourceCategory] =
    &[SourceCategory::TechPress, SourceCategory::VideoContent];

/// Cap on `site:` clauses per query to keep query strings bounded.
const MAX_SITES_PER_QUERY: usize = 3;

/// Generate the full phased query plan for a company.
/// Product-fit queries are only planned when a catalog is supplied.
pub fn plan(company_name: &str, products: &[Product]) -> Vec<PlannedQuery> {
    let mut out = Vec::new();

    push_phase(
        &mut out,
        company_name,
        QueryPhase::Expansion,
        EXPANSION_TEMPLATES,
        EXPANSION_SOURCES,
        Recency::PastYear,
    );
    push_phase(
        &mut out,
        company_name,
        QueryPhase::Procurement,
        PROCUREMENT_TEMPLATES,
        PROCUREMENT_SOURCES,
        Recency::PastYear,
    );
    push_phase(
        &mut out,
        company_name,
        QueryPhase::Hiring,
        HIRING_TEMPLATES,
        HIRING_SOURCES,
        Recency::PastYear,
    );
    push_phase(
        &mut out,
        company_name,
        QueryPhase::Growth,
        GROWTH_TEMPLATES,
        GROWTH_SOURCES,
        Recency::PastTwoYears,
    );
    push_phase(
        &mut out,
        company_name,
        QueryPhase::Leadership,
        LEADERSHIP_TEMPLATES,
        LEADERSHIP_SOURCES,
        Recency::PastFiveYears,
    );

    if !products.is_empty() {
        for template in product_fit_templates(company_name, products) {
            for &category in PRODUCT_FIT_SOURCES {
                out.push(PlannedQuery {
                    query: scoped(&template, category),
                    category,
                    recency: Recency::PastYear,
                    phase: QueryPhase::ProductFit,
                });
            }
        }
    }

    out
}

fn push_phase(
    out: &mut Vec<PlannedQuery>,
    company_name: &str,
    phase: QueryPhase,
    templates: &[&str],
    categories: &[SourceCategory],
    recency: Recency,
) {
    for template in templates {
        let query = template.replace("{c}", company_name);
        for &category in categories {
            out.push(PlannedQuery {
                query: scoped(&query, category),
                category,
                recency,
                phase,
            });
        }
    }
}

/// Append the category's `site:` restriction to a query.
fn scoped(query: &str, category: SourceCategory) -> String {
    let sites = sources::profile(category).sites;
    let clauses: Vec<String> = sites
        .iter()
        .take(MAX_SITES_PER_QUERY)
        .map(|s| format!("site:{s}"))
        .collect();
    if clauses.len() == 1 {
        format!("{query} {}", clauses[0])
    } else {
        format!("{query} ({})", clauses.join(" OR "))
    }
}

/// Queries probing whether the company trades in the catalog's categories.
fn product_fit_templates(company_name: &str, products: &[Product]) -> Vec<String> {
    let mut categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();
    let joined = categories
        .into_iter()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        format!("\"{company_name}\" {joined} supplier"),
        format!("\"{company_name}\" distributor products"),
    ]
}
