// Signal extraction: scan evidence text against per-type keyword sets.
//
// Matching sits behind the SignalMatcher seam so the keyword sets can be
// swapped for a trained classifier without touching scoring. Relevance is
// derived purely from the evidence's source weight, not match strength.

use leadsignal_common::{EvidenceItem, Relevance, Signal, SignalType};

/// Source weight at or above which a signal is high relevance.
const HIGH_RELEVANCE_WEIGHT: u8 = 90;
/// Source weight at or above which a signal is medium relevance.
const MEDIUM_RELEVANCE_WEIGHT: u8 = 70;

const EXPANSION_KEYWORDS: &[&str] = &[
    "expansion",
    "expanding",
    "expands",
    "new facility",
    "new plant",
    "new office",
    "new warehouse",
    "new branch",
    "new location",
    "opens",
    "opening",
    "inaugurat",
    "enters market",
    "entering the market",
];

const PROCUREMENT_KEYWORDS: &[&str] = &[
    "procurement",
    "purchase",
    "purchasing",
    "tender",
    "rfp",
    "request for proposal",
    "supplier contract",
    "sourcing",
    "buys equipment",
    "acquires equipment",
];

const HIRING_KEYWORDS: &[&str] = &[
    "hiring",
    "job opening",
    "vacancy",
    "vacancies",
    "recruiting",
    "recruitment",
    "now hiring",
    "join our team",
    "careers",
];

const GROWTH_KEYWORDS: &[&str] = &[
    "revenue growth",
    "record revenue",
    "funding round",
    "series a",
    "series b",
    "raised",
    "investment",
    "profit",
    "ipo",
    "acquisition",
    "annual growth",
];

const PRODUCT_FIT_KEYWORDS: &[&str] = &[
    "distributor",
    "wholesale",
    "reseller",
    "supplier",
    "importer",
    "exporter",
    "b2b",
    "oem",
    "dealer",
];

/// Detects which signal types a piece of evidence text exhibits.
pub trait SignalMatcher: Send + Sync {
    fn detect(&self, text: &str) -> Vec<SignalType>;
}

/// Default matcher: case-insensitive substring search over static
/// keyword sets, one set per signal type.
#[derive(Default)]
pub struct KeywordMatcher;

impl SignalMatcher for KeywordMatcher {
    fn detect(&self, text: &str) -> Vec<SignalType> {
        let sets: [(SignalType, &[&str]); 5] = [
            (SignalType::Expansion, EXPANSION_KEYWORDS),
            (SignalType::Procurement, PROCUREMENT_KEYWORDS),
            (SignalType::Hiring, HIRING_KEYWORDS),
            (SignalType::Growth, GROWTH_KEYWORDS),
            (SignalType::ProductFit, PRODUCT_FIT_KEYWORDS),
        ];

        sets.iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(ty, _)| *ty)
            .collect()
    }
}

/// Relevance tier for a source weight: >=90 high, >=70 medium, else low.
pub fn relevance_for_weight(weight: u8) -> Relevance {
    if weight >= HIGH_RELEVANCE_WEIGHT {
        Relevance::High
    } else if weight >= MEDIUM_RELEVANCE_WEIGHT {
        Relevance::Medium
    } else {
        Relevance::Low
    }
}

/// Scan the evidence list. One item may emit zero, one, or several
/// signals; extraction is deterministic over the same input.
pub fn extract_signals(evidence: &[EvidenceItem], matcher: &dyn SignalMatcher) -> Vec<Signal> {
    let mut signals = Vec::new();

    for item in evidence {
        let text = format!("{} {}", item.title, item.snippet).to_lowercase();
        for signal_type in matcher.detect(&text) {
            signals.push(Signal {
                signal_type,
                description: item.title.clone(),
                source: item.source_category.to_string(),
                url: item.link.clone(),
                relevance: relevance_for_weight(item.source_weight),
                date: item.date.clone(),
            });
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadsignal_common::SourceCategory;

    fn evidence(title: &str, snippet: &str, weight: u8) -> EvidenceItem {
        EvidenceItem {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: "https://reuters.com/a".to_string(),
            source_category: SourceCategory::PremiumNews,
            source_weight: weight,
            date: None,
            position: None,
            query_used: "q".to_string(),
        }
    }

    #[test]
    fn relevance_tiers_from_weight() {
        assert_eq!(relevance_for_weight(95), Relevance::High);
        assert_eq!(relevance_for_weight(90), Relevance::High);
        assert_eq!(relevance_for_weight(75), Relevance::Medium);
        assert_eq!(relevance_for_weight(60), Relevance::Low);
    }

    #[test]
    fn one_item_can_emit_multiple_signals() {
        let item = evidence(
            "Acme now hiring as revenue growth accelerates",
            "recruiting 40 engineers after record revenue year",
            90,
        );
        let signals = extract_signals(&[item], &KeywordMatcher);
        let types: Vec<_> = signals.iter().map(|s| s.signal_type).collect();
        assert!(types.contains(&SignalType::Hiring));
        assert!(types.contains(&SignalType::Growth));
    }

    #[test]
    fn no_keywords_no_signals() {
        let item = evidence("Quarterly weather outlook", "sunny in Q3", 90);
        assert!(extract_signals(&[item], &KeywordMatcher).is_empty());
    }

    #[test]
    fn relevance_comes_from_source_not_match() {
        let strong_text_weak_source = evidence(
            "Massive expansion: new facility, new office, new warehouse",
            "expanding everywhere",
            60,
        );
        let signals = extract_signals(&[strong_text_weak_source], &KeywordMatcher);
        assert!(signals.iter().all(|s| s.relevance == Relevance::Low));
    }

    #[test]
    fn extraction_is_idempotent() {
        let items = vec![
            evidence("Acme opens new plant", "expansion in Brazil", 90),
            evidence("Acme hiring push", "now hiring in sales", 75),
        ];
        let first = extract_signals(&items, &KeywordMatcher);
        let second = extract_signals(&items, &KeywordMatcher);
        assert_eq!(first, second);
    }

    #[test]
    fn signals_keep_traceable_source_and_url() {
        let item = evidence("Acme expansion", "new facility", 90);
        let signals = extract_signals(&[item], &KeywordMatcher);
        assert!(!signals.is_empty());
        assert_eq!(signals[0].url, "https://reuters.com/a");
        assert_eq!(signals[0].source, "premium_news");
    }
}
