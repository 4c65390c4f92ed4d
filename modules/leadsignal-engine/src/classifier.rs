// Lead classification: capped additive scoring over the signal set and
// the aggregate product-fit score, mapped to status/confidence/timeline.
//
// The point tables are behavior-compatible constants with no documented
// derivation upstream. Treat them as configuration; change in one place.

use leadsignal_common::{
    Confidence, LeadClassification, LeadStatus, Relevance, Signal, SignalType, Timeline,
};

// Expansion and procurement share a table.
const EXPANSION_STRONG: u8 = 25; // >=2 high-relevance
const EXPANSION_MODERATE: u8 = 15; // >=1 high or >=2 medium
const EXPANSION_ANY: u8 = 5;

const HIRING_STRONG: u8 = 20; // >=5 total or >=2 high
const HIRING_MODERATE: u8 = 12; // >=3 total or >=1 high
const HIRING_ANY: u8 = 5;

const GROWTH_STRONG: u8 = 15; // >=2 high
const GROWTH_MODERATE: u8 = 10; // >=1 high or >=2 medium
const GROWTH_ANY: u8 = 5;

const FIT_STRONG: u8 = 15; // fit >= 70
const FIT_MODERATE: u8 = 10; // fit >= 40
const FIT_ANY: u8 = 5; // fit > 0

const HOT_THRESHOLD: u8 = 75;
const WARM_THRESHOLD: u8 = 40;

#[derive(Debug, Default, Clone, Copy)]
struct TypeCounts {
    total: u32,
    high: u32,
    medium: u32,
}

fn counts_for(signals: &[Signal], signal_type: SignalType) -> TypeCounts {
    let mut c = TypeCounts::default();
    for s in signals.iter().filter(|s| s.signal_type == signal_type) {
        c.total += 1;
        match s.relevance {
            Relevance::High => c.high += 1,
            Relevance::Medium => c.medium += 1,
            Relevance::Low => {}
        }
    }
    c
}

/// Expansion/procurement point table.
fn expansion_points(c: TypeCounts) -> u8 {
    if c.high >= 2 {
        EXPANSION_STRONG
    } else if c.high >= 1 || c.medium >= 2 {
        EXPANSION_MODERATE
    } else if c.total > 0 {
        EXPANSION_ANY
    } else {
        0
    }
}

fn hiring_points(c: TypeCounts) -> u8 {
    if c.total >= 5 || c.high >= 2 {
        HIRING_STRONG
    } else if c.total >= 3 || c.high >= 1 {
        HIRING_MODERATE
    } else if c.total > 0 {
        HIRING_ANY
    } else {
        0
    }
}

fn growth_points(c: TypeCounts) -> u8 {
    if c.high >= 2 {
        GROWTH_STRONG
    } else if c.high >= 1 || c.medium >= 2 {
        GROWTH_MODERATE
    } else if c.total > 0 {
        GROWTH_ANY
    } else {
        0
    }
}

fn fit_points(fit_score: u8) -> u8 {
    if fit_score >= 70 {
        FIT_STRONG
    } else if fit_score >= 40 {
        FIT_MODERATE
    } else if fit_score > 0 {
        FIT_ANY
    } else {
        0
    }
}

/// Combine the full signal set and the aggregate fit score into the final
/// verdict. Derived once per pipeline run.
pub fn classify(signals: &[Signal], fit_score: u8) -> LeadClassification {
    let expansion = counts_for(signals, SignalType::Expansion);
    let procurement = counts_for(signals, SignalType::Procurement);
    let hiring = counts_for(signals, SignalType::Hiring);
    let growth = counts_for(signals, SignalType::Growth);

    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    let pts = expansion_points(expansion);
    if pts > 0 {
        score += pts as u32;
        reasons.push(format!(
            "{} expansion signals ({} high relevance) +{pts}",
            expansion.total, expansion.high
        ));
    }

    let pts = expansion_points(procurement);
    if pts > 0 {
        score += pts as u32;
        reasons.push(format!(
            "{} procurement signals ({} high relevance) +{pts}",
            procurement.total, procurement.high
        ));
    }

    let pts = hiring_points(hiring);
    if pts > 0 {
        score += pts as u32;
        reasons.push(format!(
            "{} hiring signals ({} high relevance) +{pts}",
            hiring.total, hiring.high
        ));
    }

    let pts = growth_points(growth);
    if pts > 0 {
        score += pts as u32;
        reasons.push(format!(
            "{} growth signals ({} high relevance) +{pts}",
            growth.total, growth.high
        ));
    }

    let pts = fit_points(fit_score);
    if pts > 0 {
        score += pts as u32;
        reasons.push(format!("product fit {fit_score}/100 +{pts}"));
    }

    let score = score.min(100) as u8;

    // Hot confidence needs hard buying evidence, not just volume.
    let strong_buying_evidence = expansion.high >= 2 || procurement.high >= 2;

    let (status, confidence, timeline) = if score >= HOT_THRESHOLD {
        let confidence = if strong_buying_evidence {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (LeadStatus::Hot, confidence, Timeline::Days30)
    } else if score >= WARM_THRESHOLD {
        let confidence = if expansion.total + procurement.total >= 3 {
            Confidence::Medium
        } else {
            Confidence::Low
        };
        (LeadStatus::Warm, confidence, Timeline::Days60)
    } else {
        (LeadStatus::Cold, Confidence::Low, Timeline::Days90)
    };

    let explanation = if signals.is_empty() && fit_score == 0 {
        "No expansion, procurement, hiring, or growth signals found; no product fit established."
            .to_string()
    } else if signals.is_empty() {
        format!("No buying signals found; product fit {fit_score}/100 is the only input.")
    } else {
        reasons.join("; ")
    };

    let recommendation = match status {
        LeadStatus::Hot => "Engage immediately with a tailored proposal.".to_string(),
        LeadStatus::Warm => "Nurture with targeted content and re-check next quarter.".to_string(),
        LeadStatus::Cold => "Monitor quarterly; no active outreach warranted.".to_string(),
    };

    LeadClassification {
        score,
        status,
        confidence,
        explanation,
        signals_detected: signals.len() as u32,
        timeline_to_close: timeline,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(signal_type: SignalType, relevance: Relevance) -> Signal {
        Signal {
            signal_type,
            description: "desc".to_string(),
            source: "premium_news".to_string(),
            url: "https://reuters.com/a".to_string(),
            relevance,
            date: None,
        }
    }

    fn n_signals(n: usize, ty: SignalType, rel: Relevance) -> Vec<Signal> {
        (0..n).map(|_| signal(ty, rel)).collect()
    }

    #[test]
    fn three_high_expansion_with_fit_eighty_is_warm_forty() {
        // 25 (expansion) + 15 (fit >= 70) = 40 -> warm
        let signals = n_signals(3, SignalType::Expansion, Relevance::High);
        let c = classify(&signals, 80);
        assert_eq!(c.score, 40);
        assert_eq!(c.status, LeadStatus::Warm);
    }

    #[test]
    fn empty_everything_is_cold_low_with_explicit_explanation() {
        let c = classify(&[], 0);
        assert_eq!(c.score, 0);
        assert_eq!(c.status, LeadStatus::Cold);
        assert_eq!(c.confidence, Confidence::Low);
        assert_eq!(c.timeline_to_close, Timeline::Days90);
        assert!(c.explanation.contains("No expansion"));
        assert!(!c.explanation.is_empty());
    }

    #[test]
    fn hot_needs_seventy_five() {
        // 25 + 25 + 20 + 15 = 85: strong everywhere
        let mut signals = n_signals(2, SignalType::Expansion, Relevance::High);
        signals.extend(n_signals(2, SignalType::Procurement, Relevance::High));
        signals.extend(n_signals(5, SignalType::Hiring, Relevance::Medium));
        let c = classify(&signals, 75);
        assert!(c.score >= 75, "score was {}", c.score);
        assert_eq!(c.status, LeadStatus::Hot);
        assert_eq!(c.confidence, Confidence::High);
        assert_eq!(c.timeline_to_close, Timeline::Days30);
    }

    #[test]
    fn hot_without_high_expansion_or_procurement_is_medium_confidence() {
        // Build >=75 without two high expansion/procurement signals:
        // expansion 1 high (15) + procurement 1 high (15) + hiring 2 high (20)
        // + growth 2 high (15) + fit 15 = 80
        let mut signals = n_signals(1, SignalType::Expansion, Relevance::High);
        signals.extend(n_signals(1, SignalType::Procurement, Relevance::High));
        signals.extend(n_signals(2, SignalType::Hiring, Relevance::High));
        signals.extend(n_signals(2, SignalType::Growth, Relevance::High));
        let c = classify(&signals, 80);
        assert_eq!(c.status, LeadStatus::Hot);
        assert_eq!(c.confidence, Confidence::Medium);
    }

    #[test]
    fn warm_confidence_depends_on_buying_signal_count() {
        // 15 (1 high expansion) + 15 (1 high procurement) + 12 (1 high hiring) = 42
        let mut signals = n_signals(1, SignalType::Expansion, Relevance::High);
        signals.extend(n_signals(1, SignalType::Procurement, Relevance::High));
        signals.extend(n_signals(1, SignalType::Hiring, Relevance::High));
        let c = classify(&signals, 0);
        assert_eq!(c.status, LeadStatus::Warm);
        // expansion + procurement count is 2, below the 3 threshold
        assert_eq!(c.confidence, Confidence::Low);

        signals.extend(n_signals(1, SignalType::Expansion, Relevance::Low));
        let c = classify(&signals, 0);
        assert_eq!(c.status, LeadStatus::Warm);
        assert_eq!(c.confidence, Confidence::Medium);
    }

    #[test]
    fn score_monotone_in_high_relevance_signals_per_category() {
        for ty in [
            SignalType::Expansion,
            SignalType::Procurement,
            SignalType::Hiring,
            SignalType::Growth,
        ] {
            let mut prev = 0;
            for n in 0..6 {
                let score = classify(&n_signals(n, ty, Relevance::High), 0).score;
                assert!(
                    score >= prev,
                    "score decreased from {prev} to {score} at n={n} for {ty}"
                );
                prev = score;
            }
        }
    }

    #[test]
    fn total_is_clamped_to_hundred() {
        // Max out every table: 25+25+20+15+15 = 100 exactly; clamp holds.
        let mut signals = n_signals(3, SignalType::Expansion, Relevance::High);
        signals.extend(n_signals(3, SignalType::Procurement, Relevance::High));
        signals.extend(n_signals(6, SignalType::Hiring, Relevance::High));
        signals.extend(n_signals(3, SignalType::Growth, Relevance::High));
        let c = classify(&signals, 100);
        assert_eq!(c.score, 100);
    }

    #[test]
    fn signals_detected_counts_all_signals() {
        let mut signals = n_signals(2, SignalType::Hiring, Relevance::Low);
        signals.extend(n_signals(1, SignalType::Growth, Relevance::Low));
        let c = classify(&signals, 0);
        assert_eq!(c.signals_detected, 3);
    }
}
