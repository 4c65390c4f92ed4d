use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reason code surfaced to the caller when the content-safety gate trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    MarketplaceDomain,
    FacebookContent,
    SocialContent,
    AcademicPublication,
    ListingTitle,
}

impl std::fmt::Display for BlockedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockedReason::MarketplaceDomain => write!(f, "marketplace_domain"),
            BlockedReason::FacebookContent => write!(f, "facebook_content"),
            BlockedReason::SocialContent => write!(f, "social_content"),
            BlockedReason::AcademicPublication => write!(f, "academic_publication"),
            BlockedReason::ListingTitle => write!(f, "listing_title"),
        }
    }
}

/// A tripped gate: the reason code plus the offending domain or name
/// fragment, so callers can report what was matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedMatch {
    pub reason: BlockedReason,
    pub matched: String,
}

// ---------------------------------------------------------------------------
// Domain predicates
// ---------------------------------------------------------------------------

/// Marketplaces and product-listing platforms. Pages here describe goods
/// for sale, not the companies selling them.
const MARKETPLACE_DOMAINS: &[&str] = &[
    "amazon.",
    "ebay.",
    "alibaba.com",
    "aliexpress.com",
    "mercadolivre.com",
    "mercadolibre.com",
    "etsy.com",
    "walmart.com",
    "shopee.",
    "wish.com",
];

/// Academic publishers and paper repositories.
const ACADEMIC_DOMAINS: &[&str] = &[
    "sciencedirect.com",
    "springer.com",
    "link.springer.com",
    "jstor.org",
    "researchgate.net",
    "academia.edu",
    "ieee.org",
    "ncbi.nlm.nih.gov",
];

/// Social-network path fragments that identify a post/group/video rather
/// than a company page. A bare profile URL is allowed through.
const FACEBOOK_CONTENT_PATHS: &[&str] = &["/posts/", "/groups/", "/videos/", "/photos/", "/events/"];

const SOCIAL_CONTENT_PATTERNS: &[&str] = &[
    "instagram.com/p/",
    "instagram.com/reel/",
    "youtube.com/watch",
    "youtu.be/",
    "linkedin.com/posts/",
    "linkedin.com/pulse/",
    "tiktok.com/@",
    "pinterest.",
];

static TWITTER_STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:twitter\.com|x\.com)/[^/]+/status/").unwrap());

fn host_of(url: &str) -> String {
    url.split("://")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Check a URL against the non-company source lists.
/// Inspects both the host (marketplaces, publishers) and the path
/// (social post/group/video content).
pub fn blocked_domain(url: &str) -> Option<BlockedMatch> {
    let lower = url.to_lowercase();
    let host = host_of(&lower);

    for d in MARKETPLACE_DOMAINS {
        if host.contains(d) {
            return Some(BlockedMatch {
                reason: BlockedReason::MarketplaceDomain,
                matched: host.clone(),
            });
        }
    }

    for d in ACADEMIC_DOMAINS {
        if host.contains(d) {
            return Some(BlockedMatch {
                reason: BlockedReason::AcademicPublication,
                matched: host.clone(),
            });
        }
    }

    if host.contains("facebook.com") {
        for p in FACEBOOK_CONTENT_PATHS {
            if lower.contains(p) {
                return Some(BlockedMatch {
                    reason: BlockedReason::FacebookContent,
                    matched: lower.clone(),
                });
            }
        }
    }

    for p in SOCIAL_CONTENT_PATTERNS {
        if lower.contains(p) {
            return Some(BlockedMatch {
                reason: BlockedReason::SocialContent,
                matched: lower.clone(),
            });
        }
    }

    if TWITTER_STATUS_RE.is_match(&lower) {
        return Some(BlockedMatch {
            reason: BlockedReason::SocialContent,
            matched: lower,
        });
    }

    None
}

// ---------------------------------------------------------------------------
// Name predicates
// ---------------------------------------------------------------------------

/// "Top 10 …", "Top 5 …" listicle openers.
static TOP_N_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^top\s+\d+\b").unwrap());

/// Trailing year in parentheses, "(2024)": article titles, not companies.
static TRAILING_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(20\d{2}\)\s*$").unwrap());

/// "Part II:", "Part 2:" serialized-article markers.
static PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpart\s+(?:[ivx]+|\d+)\s*:").unwrap());

/// Imperative shopping verbs that mark a product listing.
static SHOPPING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:buy|shop|order)\s+(?:now|online|today)\b|\bbest\s+price\b|\bfree\s+shipping\b")
        .unwrap()
});

/// Academic-publication phrasing in a candidate name.
static ACADEMIC_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:journal\s+of|proceedings\s+of|a\s+study\s+of|an\s+analysis\s+of)\b")
        .unwrap()
});

/// Candidate names longer than this are article headlines, not companies.
const MAX_NAME_LEN: usize = 120;

fn contains_emoji(s: &str) -> bool {
    s.chars().any(|c| {
        let cp = c as u32;
        (0x1F300..=0x1FAFF).contains(&cp) || (0x2600..=0x27BF).contains(&cp)
    })
}

/// Check a candidate company name against article/product/listing
/// patterns. The same domain can host both legitimate company pages and
/// listing pages, so the name string gets its own gate.
pub fn blocked_name(name: &str) -> Option<BlockedMatch> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() > MAX_NAME_LEN || contains_emoji(trimmed) {
        return Some(BlockedMatch {
            reason: BlockedReason::ListingTitle,
            matched: trimmed.to_string(),
        });
    }

    if TOP_N_RE.is_match(trimmed)
        || TRAILING_YEAR_RE.is_match(trimmed)
        || PART_RE.is_match(trimmed)
        || SHOPPING_RE.is_match(trimmed)
    {
        return Some(BlockedMatch {
            reason: BlockedReason::ListingTitle,
            matched: trimmed.to_string(),
        });
    }

    if ACADEMIC_PHRASE_RE.is_match(trimmed) {
        return Some(BlockedMatch {
            reason: BlockedReason::AcademicPublication,
            matched: trimmed.to_string(),
        });
    }

    None
}

/// Composed gate: domain checks OR name checks, first match wins.
pub fn check_target(url: &str, name: Option<&str>) -> Option<BlockedMatch> {
    if let Some(m) = blocked_domain(url) {
        return Some(m);
    }
    if let Some(n) = name {
        if let Some(m) = blocked_name(n) {
            return Some(m);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketplace_domain_blocked() {
        let m = blocked_domain("https://www.amazon.com/some-product/dp/B0123").unwrap();
        assert_eq!(m.reason, BlockedReason::MarketplaceDomain);
        assert_eq!(m.matched, "www.amazon.com");
    }

    #[test]
    fn facebook_post_blocked_with_facebook_reason() {
        let m = blocked_domain("https://facebook.com/somecompany/posts/123").unwrap();
        assert_eq!(m.reason, BlockedReason::FacebookContent);
    }

    #[test]
    fn facebook_profile_allowed() {
        assert!(blocked_domain("https://facebook.com/somecompany").is_none());
    }

    #[test]
    fn youtube_video_blocked() {
        let m = blocked_domain("https://www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(m.reason, BlockedReason::SocialContent);
    }

    #[test]
    fn twitter_status_blocked_profile_allowed() {
        assert!(blocked_domain("https://x.com/acme/status/99887").is_some());
        assert!(blocked_domain("https://x.com/acme").is_none());
    }

    #[test]
    fn academic_publisher_blocked() {
        let m = blocked_domain("https://www.sciencedirect.com/science/article/pii/S01").unwrap();
        assert_eq!(m.reason, BlockedReason::AcademicPublication);
    }

    #[test]
    fn plain_company_site_allowed() {
        assert!(blocked_domain("https://www.acme-pumps.com/about").is_none());
    }

    #[test]
    fn top_n_name_blocked() {
        assert!(blocked_name("Top 10 Pilates Studios in Berlin").is_some());
    }

    #[test]
    fn trailing_year_blocked() {
        assert!(blocked_name("Best Industrial Valves Compared (2025)").is_some());
    }

    #[test]
    fn part_marker_blocked() {
        assert!(blocked_name("Supply Chains Part II: The Reckoning").is_some());
        assert!(blocked_name("Supply Chains Part 2: The Reckoning").is_some());
    }

    #[test]
    fn shopping_verbs_blocked() {
        assert!(blocked_name("Buy Now — Hydraulic Pump XR200").is_some());
        assert!(blocked_name("Free shipping on all valves").is_some());
    }

    #[test]
    fn academic_phrasing_blocked() {
        let m = blocked_name("Journal of Applied Manufacturing").unwrap();
        assert_eq!(m.reason, BlockedReason::AcademicPublication);
    }

    #[test]
    fn ordinary_company_name_allowed() {
        assert!(blocked_name("Guangzhou ABC Pilates Co").is_none());
        assert!(blocked_name("Acme Industrial Supply Ltda").is_none());
    }

    #[test]
    fn emoji_name_blocked() {
        assert!(blocked_name("Best Deals 🔥🔥").is_some());
    }

    #[test]
    fn overlong_name_blocked() {
        let long = "a".repeat(130);
        assert!(blocked_name(&long).is_some());
    }

    #[test]
    fn check_target_prefers_domain_match() {
        let m = check_target(
            "https://www.ebay.com/itm/12345",
            Some("Top 10 Sellers (2024)"),
        )
        .unwrap();
        assert_eq!(m.reason, BlockedReason::MarketplaceDomain);
    }
}
