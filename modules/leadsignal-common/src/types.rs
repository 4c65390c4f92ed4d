use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Identity types ---

/// Which path produced a resolved identity.
/// `DnsScrape` means the company page itself contributed fields;
/// `SearchAggregation` means only query evidence did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    None,
    DnsScrape,
    SearchAggregation,
}

/// Normalized company identity. Built by a first-writer-wins reducer:
/// once a field is set by one resolution step, no later step overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub source: IdentitySource,
}

impl CompanyIdentity {
    pub fn empty() -> Self {
        Self {
            name: None,
            country: None,
            city: None,
            state: None,
            address: None,
            phone: None,
            email: None,
            source: IdentitySource::None,
        }
    }
}

// --- Source catalog types ---

/// Information-source category. Each category carries a reliability weight
/// (see the engine's source catalog) that drives signal relevance tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    JobBoard,
    OfficialRegistry,
    PremiumNews,
    TechPress,
    VideoContent,
    B2bSocial,
    BusinessIntelligence,
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceCategory::JobBoard => write!(f, "job_board"),
            SourceCategory::OfficialRegistry => write!(f, "official_registry"),
            SourceCategory::PremiumNews => write!(f, "premium_news"),
            SourceCategory::TechPress => write!(f, "tech_press"),
            SourceCategory::VideoContent => write!(f, "video_content"),
            SourceCategory::B2bSocial => write!(f, "b2b_social"),
            SourceCategory::BusinessIntelligence => write!(f, "business_intelligence"),
        }
    }
}

// --- Evidence ---

/// One raw search-result row tagged with where it came from.
/// Immutable once collected; lives for a single pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub source_category: SourceCategory,
    pub source_weight: u8,
    pub date: Option<String>,
    pub position: Option<u32>,
    pub query_used: String,
}

// --- Signals ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Expansion,
    Procurement,
    Hiring,
    Growth,
    ProductFit,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalType::Expansion => write!(f, "expansion"),
            SignalType::Procurement => write!(f, "procurement"),
            SignalType::Hiring => write!(f, "hiring"),
            SignalType::Growth => write!(f, "growth"),
            SignalType::ProductFit => write!(f, "product_fit"),
        }
    }
}

/// Relevance tier of a signal: a property of where the evidence came
/// from (source weight), not of how strong the keyword match was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    Low,
    Medium,
    High,
}

/// A typed, evidence-backed indication about the target company.
/// Always traceable: `source` and `url` point back at the evidence row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_type: SignalType,
    pub description: String,
    pub source: String,
    pub url: String,
    pub relevance: Relevance,
    pub date: Option<String>,
}

// --- Catalog / profile types ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSize {
    Startup,
    Small,
    Mid,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionModel {
    Distributor,
    Importer,
    Manufacturer,
}

impl std::fmt::Display for DistributionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionModel::Distributor => write!(f, "distributor"),
            DistributionModel::Importer => write!(f, "importer"),
            DistributionModel::Manufacturer => write!(f, "manufacturer"),
        }
    }
}

/// One sellable product from the seller's catalog. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub industry: Option<String>,
    pub target_size: Option<TargetSize>,
    pub distribution_model: Option<DistributionModel>,
    #[serde(default)]
    pub regions: Vec<String>,
}

/// What we know about the target company when scoring product fit.
/// All fields optional; missing data degrades individual dimensions,
/// never the whole calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: Option<String>,
    pub employee_count: Option<u32>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub business_model: Option<DistributionModel>,
}

// --- Product fit ---

/// One scored dimension with its human-readable justification.
/// The explanation is populated even at a zero score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u8,
    pub explanation: String,
}

/// Per-product fit breakdown. `match_score` is the sum of the five
/// dimensions, capped at 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFitBreakdown {
    pub product_id: String,
    pub product_name: String,
    pub industry: DimensionScore,
    pub size: DimensionScore,
    pub category: DimensionScore,
    pub geography: DimensionScore,
    pub business_model: DimensionScore,
    pub match_score: u8,
}

/// Catalog-level fit report: products ranked by match score descending,
/// aggregate = integer mean of the top three (0 for an empty catalog).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFitReport {
    pub ranked: Vec<ProductFitBreakdown>,
    pub aggregate_score: u8,
    pub recommendations: Vec<String>,
}

// --- Classification ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Hot,
    Warm,
    Cold,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::Hot => write!(f, "hot"),
            LeadStatus::Warm => write!(f, "warm"),
            LeadStatus::Cold => write!(f, "cold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "30_days")]
    Days30,
    #[serde(rename = "60_days")]
    Days60,
    #[serde(rename = "90_days")]
    Days90,
    #[serde(rename = "120_days")]
    Days120,
    #[serde(rename = "180_days+")]
    Days180Plus,
}

/// Final verdict for one pipeline run. Derived once from the full signal
/// set and the top-ranked fit breakdowns; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadClassification {
    pub score: u8,
    pub status: LeadStatus,
    pub confidence: Confidence,
    pub explanation: String,
    pub signals_detected: u32,
    pub timeline_to_close: Timeline,
    pub recommendation: String,
}

// --- Leadership ---

/// A named person with a title, pulled from business-intelligence
/// evidence. Deduplicated by lowercased name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipContact {
    pub name: String,
    pub title: String,
    pub source: String,
    pub url: String,
}

// --- Report ---

/// Everything one qualification run produced, plus execution metadata.
/// The raw evidence list always ships with the verdict (auditability).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub classification: LeadClassification,
    pub product_fit: ProductFitReport,
    pub dnb_leadership: Vec<LeadershipContact>,
    pub evidences: Vec<EvidenceItem>,
    pub sources_checked: u32,
    pub queries_executed: u32,
    pub execution_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&Timeline::Days30).unwrap(),
            "\"30_days\""
        );
        assert_eq!(
            serde_json::to_string(&Timeline::Days180Plus).unwrap(),
            "\"180_days+\""
        );
    }

    #[test]
    fn identity_source_snake_case() {
        assert_eq!(
            serde_json::to_string(&IdentitySource::DnsScrape).unwrap(),
            "\"dns_scrape\""
        );
    }

    #[test]
    fn relevance_ordering() {
        assert!(Relevance::High > Relevance::Medium);
        assert!(Relevance::Medium > Relevance::Low);
    }
}
