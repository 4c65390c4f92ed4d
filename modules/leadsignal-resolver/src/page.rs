// Page-content extraction: name candidates (metadata, title, copyright,
// domain label) and contact/location fields (phone, email, address)
// pulled from raw HTML with regex. No DOM parsing; the fields we need
// survive in the markup as plain text.

use std::sync::LazyLock;

use regex::Regex;

static OG_SITE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+property=["']og:site_name["'][^>]+content=["']([^"']+)["']|<meta[^>]+content=["']([^"']+)["'][^>]+property=["']og:site_name["']"#,
    )
    .unwrap()
});

static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type=["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .unwrap()
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

static COPYRIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:©|&copy;|\(c\))\s*(?:20\d{2})?\s*,?\s*([A-Z][A-Za-z0-9&.,' \-]{2,60})")
        .unwrap()
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,5}\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:St|Street|Ave|Avenue|Blvd|Boulevard|Dr|Drive|Ln|Lane|Rd|Road|Way|Ct|Pl|Cir|Ter)\b").unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

/// Markup stripped to plain text for the free-text scans (phone, postal,
/// "located in" phrasing). Crude but sufficient; the fields we scan for
/// are not attribute-encoded.
pub fn visible_text(html: &str) -> String {
    TAG_RE.replace_all(html, " ").to_string()
}

/// `og:site_name` meta tag, either attribute order.
pub fn site_name(html: &str) -> Option<String> {
    let caps = OG_SITE_NAME_RE.captures(html)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Organization name from a JSON-LD structured-data block.
pub fn structured_org_name(html: &str) -> Option<String> {
    for caps in JSON_LD_RE.captures_iter(html) {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(caps[1].trim()) else {
            continue;
        };
        if let Some(name) = org_name_from_value(&value) {
            return Some(name);
        }
    }
    None
}

fn org_name_from_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Array(items) => items.iter().find_map(org_name_from_value),
        serde_json::Value::Object(map) => {
            let is_org = map
                .get("@type")
                .and_then(|t| t.as_str())
                .is_some_and(|t| t.eq_ignore_ascii_case("Organization"));
            if is_org {
                return map
                    .get("name")
                    .and_then(|n| n.as_str())
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
            }
            // Nested graphs: {"@graph": [...]}
            map.get("@graph").and_then(org_name_from_value)
        }
        _ => None,
    }
}

/// First segment of the page title, split on spaced separators.
pub fn title_name(html: &str) -> Option<String> {
    let caps = TITLE_RE.captures(html)?;
    let full = caps[1].trim();
    if full.is_empty() {
        return None;
    }
    let first = ["|", " – ", " - ", "—"]
        .iter()
        .fold(full.to_string(), |acc, sep| {
            acc.split(sep).next().unwrap_or(&acc).trim().to_string()
        });
    (!first.is_empty()).then_some(first)
}

/// Company name from footer copyright text. Boilerplate after the name
/// ("All rights reserved") is cut off.
pub fn copyright_name(html: &str) -> Option<String> {
    let caps = COPYRIGHT_RE.captures(html)?;
    let raw = caps[1].trim();
    let cleaned = raw
        .split("All rights")
        .next()
        .unwrap_or(raw)
        .trim()
        .trim_end_matches(['.', ','])
        .trim()
        .to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Title-cased first label of the host: "acme-pumps.com" -> "Acme-pumps".
pub fn domain_label_name(host: &str) -> Option<String> {
    let label = host
        .trim_start_matches("www.")
        .split('.')
        .next()?
        .trim();
    if label.is_empty() {
        return None;
    }
    let mut chars = label.chars();
    let first = chars.next()?.to_uppercase().to_string();
    Some(format!("{first}{}", chars.as_str()))
}

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn find_address(text: &str) -> Option<String> {
    ADDRESS_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_name_both_attribute_orders() {
        let a = r#"<meta property="og:site_name" content="Acme Pumps" />"#;
        let b = r#"<meta content="Acme Pumps" property="og:site_name" />"#;
        assert_eq!(site_name(a).unwrap(), "Acme Pumps");
        assert_eq!(site_name(b).unwrap(), "Acme Pumps");
    }

    #[test]
    fn structured_org_name_from_json_ld() {
        let html = r#"<script type="application/ld+json">
            {"@context":"https://schema.org","@type":"Organization","name":"Acme Industrial"}
        </script>"#;
        assert_eq!(structured_org_name(html).unwrap(), "Acme Industrial");
    }

    #[test]
    fn structured_org_name_inside_graph() {
        let html = r#"<script type="application/ld+json">
            {"@graph":[{"@type":"WebSite","name":"site"},{"@type":"Organization","name":"Graph Co"}]}
        </script>"#;
        assert_eq!(structured_org_name(html).unwrap(), "Graph Co");
    }

    #[test]
    fn title_splits_on_separators() {
        let html = "<title>Acme Pumps | Industrial Equipment Since 1980</title>";
        assert_eq!(title_name(html).unwrap(), "Acme Pumps");
        let html = "<title>Acme Pumps - Home</title>";
        assert_eq!(title_name(html).unwrap(), "Acme Pumps");
    }

    #[test]
    fn copyright_extracts_name() {
        let html = "<footer>© 2024 Acme Pumps Ltd. All rights reserved.</footer>";
        assert_eq!(copyright_name(html).unwrap(), "Acme Pumps Ltd");
    }

    #[test]
    fn domain_label_title_cased() {
        assert_eq!(domain_label_name("www.acme-pumps.com").unwrap(), "Acme-pumps");
        assert_eq!(domain_label_name("guangzhoupilates.cn").unwrap(), "Guangzhoupilates");
    }

    #[test]
    fn address_pattern() {
        assert_eq!(
            find_address("Visit us at 1200 Industrial Way, Springfield").unwrap(),
            "1200 Industrial Way"
        );
    }
}
