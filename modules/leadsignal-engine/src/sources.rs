// Static source catalog: information-source categories, their reliability
// weights, and the member sites used for site-scoped queries.
//
// Weights drive signal relevance tiers (>=90 high, >=70 medium, else low),
// so a weight change here shifts classification downstream.

use leadsignal_common::SourceCategory;

/// One catalog entry: a category, its reliability weight, and the sites
/// queries get scoped to.
pub struct SourceProfile {
    pub category: SourceCategory,
    pub weight: u8,
    pub sites: &'static [&'static str],
}

pub const CATALOG: &[SourceProfile] = &[
    SourceProfile {
        category: SourceCategory::OfficialRegistry,
        weight: 95,
        sites: &["sec.gov", "find-and-update.company-information.service.gov.uk", "gov.br"],
    },
    SourceProfile {
        category: SourceCategory::BusinessIntelligence,
        weight: 92,
        sites: &["dnb.com", "zoominfo.com", "crunchbase.com"],
    },
    SourceProfile {
        category: SourceCategory::PremiumNews,
        weight: 90,
        sites: &["bloomberg.com", "reuters.com", "ft.com", "wsj.com"],
    },
    SourceProfile {
        category: SourceCategory::TechPress,
        weight: 80,
        sites: &["techcrunch.com", "theregister.com", "zdnet.com"],
    },
    SourceProfile {
        category: SourceCategory::JobBoard,
        weight: 75,
        sites: &["linkedin.com/jobs", "indeed.com", "glassdoor.com"],
    },
    SourceProfile {
        category: SourceCategory::B2bSocial,
        weight: 70,
        sites: &["linkedin.com"],
    },
    SourceProfile {
        category: SourceCategory::VideoContent,
        weight: 60,
        sites: &["youtube.com"],
    },
];

/// Look up the catalog entry for a category.
pub fn profile(category: SourceCategory) -> &'static SourceProfile {
    CATALOG
        .iter()
        .find(|p| p.category == category)
        .expect("every SourceCategory has a catalog entry")
}

/// Reliability weight for a category.
pub fn weight(category: SourceCategory) -> u8 {
    profile(category).weight
}
