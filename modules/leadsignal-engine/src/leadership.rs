// Leadership extraction: regex over business-intelligence evidence for
// named people with executive titles, deduplicated by name.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use leadsignal_common::{EvidenceItem, LeadershipContact, SourceCategory};

const TITLES: &str = "CEO|CFO|COO|CTO|Chief Executive Officer|Chief Financial Officer|\
President|Chairman|Founder|Co-Founder|Owner|Partner|Managing Director|Director|\
Vice President|VP";

/// "CEO John Smith", "Managing Director: Maria Santos"
static TITLE_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?P<title>{TITLES})[,:]?\s+(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+){{1,2}})"
    ))
    .unwrap()
});

/// "John Smith, CEO", "Maria Santos - Owner"
static NAME_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+){{1,2}})\s*[,\-–]\s*(?P<title>{TITLES})\b"
    ))
    .unwrap()
});

/// Extract executives/directors/owners/partners from business-intelligence
/// evidence. Other source categories are skipped: people named in news
/// snippets are too often journalists or analysts.
pub fn extract_leadership(evidence: &[EvidenceItem]) -> Vec<LeadershipContact> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut contacts = Vec::new();

    for item in evidence {
        if item.source_category != SourceCategory::BusinessIntelligence {
            continue;
        }
        let text = format!("{} {}", item.title, item.snippet);

        for re in [&*TITLE_FIRST_RE, &*NAME_FIRST_RE] {
            for caps in re.captures_iter(&text) {
                let name = caps["name"].trim().to_string();
                let title = caps["title"].trim().to_string();
                if seen.insert(name.to_lowercase()) {
                    contacts.push(LeadershipContact {
                        name,
                        title,
                        source: item.source_category.to_string(),
                        url: item.link.clone(),
                    });
                }
            }
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi_evidence(title: &str, snippet: &str) -> EvidenceItem {
        EvidenceItem {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: "https://dnb.com/acme".to_string(),
            source_category: SourceCategory::BusinessIntelligence,
            source_weight: 92,
            date: None,
            position: None,
            query_used: "q".to_string(),
        }
    }

    #[test]
    fn extracts_title_first_order() {
        let items = vec![bi_evidence("Acme Corp profile", "CEO John Smith leads the firm")];
        let contacts = extract_leadership(&items);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "John Smith");
        assert_eq!(contacts[0].title, "CEO");
    }

    #[test]
    fn extracts_name_first_order() {
        let items = vec![bi_evidence("Acme Corp", "Maria Santos, Managing Director since 2019")];
        let contacts = extract_leadership(&items);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Maria Santos");
        assert_eq!(contacts[0].title, "Managing Director");
    }

    #[test]
    fn dedupes_by_name_across_items() {
        let items = vec![
            bi_evidence("Profile", "CEO John Smith"),
            bi_evidence("Directory", "John Smith, Founder"),
        ];
        let contacts = extract_leadership(&items);
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn ignores_non_bi_sources() {
        let mut item = bi_evidence("News", "CEO John Smith announces expansion");
        item.source_category = SourceCategory::PremiumNews;
        assert!(extract_leadership(&[item]).is_empty());
    }

    #[test]
    fn keeps_source_url() {
        let items = vec![bi_evidence("Profile", "Owner Jane Doe")];
        let contacts = extract_leadership(&items);
        assert_eq!(contacts[0].url, "https://dnb.com/acme");
    }
}
