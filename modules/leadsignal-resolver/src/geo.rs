// Geo reference tables: city -> country, DDI -> country, postal-code
// families, the country list for search-evidence matching, and the
// location-context keywords that anchor it.

use std::sync::LazyLock;

use regex::Regex;

/// Known city strings mapped to their country. Lookup is a lowercase
/// containment check over the candidate text.
pub const CITY_COUNTRY: &[(&str, &str)] = &[
    ("guangzhou", "China"),
    ("shenzhen", "China"),
    ("shanghai", "China"),
    ("beijing", "China"),
    ("hangzhou", "China"),
    ("ningbo", "China"),
    ("dongguan", "China"),
    ("mumbai", "India"),
    ("bangalore", "India"),
    ("chennai", "India"),
    ("new delhi", "India"),
    ("tokyo", "Japan"),
    ("osaka", "Japan"),
    ("sao paulo", "Brazil"),
    ("são paulo", "Brazil"),
    ("rio de janeiro", "Brazil"),
    ("curitiba", "Brazil"),
    ("london", "United Kingdom"),
    ("manchester", "United Kingdom"),
    ("berlin", "Germany"),
    ("munich", "Germany"),
    ("münchen", "Germany"),
    ("hamburg", "Germany"),
    ("paris", "France"),
    ("lyon", "France"),
    ("new york", "United States"),
    ("chicago", "United States"),
    ("houston", "United States"),
    ("toronto", "Canada"),
    ("vancouver", "Canada"),
    ("sydney", "Australia"),
    ("melbourne", "Australia"),
];

/// International dialing codes, longest prefix first so "+86" wins
/// over "+8" style partial matches.
pub const DDI_COUNTRY: &[(&str, &str)] = &[
    ("+86", "China"),
    ("+91", "India"),
    ("+81", "Japan"),
    ("+82", "South Korea"),
    ("+55", "Brazil"),
    ("+49", "Germany"),
    ("+44", "United Kingdom"),
    ("+61", "Australia"),
    ("+33", "France"),
    ("+34", "Spain"),
    ("+39", "Italy"),
    ("+31", "Netherlands"),
    ("+52", "Mexico"),
    ("+1", "United States"),
];

/// Countries recognized in search-evidence and "located in" phrasing.
pub const COUNTRIES: &[&str] = &[
    "China",
    "India",
    "Japan",
    "South Korea",
    "Brazil",
    "Argentina",
    "Chile",
    "Colombia",
    "Mexico",
    "Germany",
    "United Kingdom",
    "France",
    "Spain",
    "Italy",
    "Portugal",
    "Netherlands",
    "Poland",
    "Sweden",
    "United States",
    "Canada",
    "Australia",
    "Vietnam",
    "Indonesia",
    "Thailand",
];

/// Keywords that anchor a country mention to an actual location claim.
pub const LOCATION_CONTEXT: &[&str] = &[
    "located",
    "headquarters",
    "headquartered",
    "based",
    "head office",
    "offices",
];

/// Max distance (chars) between a location keyword and a country name
/// for the pair to count as location evidence.
pub const CONTEXT_WINDOW: usize = 80;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\d{1,4}[\d\s().\-]{5,}").unwrap());

// Postal-code families, one regex per country. Checked in this order; the
// US ZIP requires a leading state abbreviation because five bare digits
// match far too much.
static UK_POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2}\b").unwrap());
static CA_POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]\d[A-Za-z]\s*\d[A-Za-z]\d\b").unwrap());
static BR_CEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5}-\d{3}\b").unwrap());
static US_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\s+\d{5}(?:-\d{4})?\b").unwrap());

static LOCATED_IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:located|headquartered|based)\s+in\s+(?:the\s+)?([A-Za-z][A-Za-z ]{2,40})")
        .unwrap()
});

/// Country from a known city string in the candidate text.
pub fn city_country(text: &str) -> Option<(&'static str, &'static str)> {
    let lower = text.to_lowercase();
    CITY_COUNTRY
        .iter()
        .find(|(city, _)| lower.contains(city))
        .map(|&(city, country)| (city, country))
}

/// Country from a dialing code in a phone-looking substring.
pub fn ddi_country(text: &str) -> Option<&'static str> {
    let m = PHONE_RE.find(text)?;
    let phone = m.as_str().replace([' ', '(', ')', '.', '-'], "");
    DDI_COUNTRY
        .iter()
        .find(|(prefix, _)| phone.starts_with(prefix))
        .map(|&(_, country)| country)
}

/// Country from a postal-code family match.
pub fn postal_country(text: &str) -> Option<&'static str> {
    if UK_POSTCODE_RE.is_match(text) {
        Some("United Kingdom")
    } else if BR_CEP_RE.is_match(text) {
        Some("Brazil")
    } else if CA_POSTCODE_RE.is_match(text) {
        Some("Canada")
    } else if US_ZIP_RE.is_match(text) {
        Some("United States")
    } else {
        None
    }
}

/// "located in <Country>" phrasing, validated against the country list.
pub fn located_in_country(text: &str) -> Option<&'static str> {
    for caps in LOCATED_IN_RE.captures_iter(text) {
        let candidate = caps[1].trim().to_lowercase();
        if let Some(&country) = COUNTRIES
            .iter()
            .find(|c| candidate.starts_with(&c.to_lowercase()))
        {
            return Some(country);
        }
    }
    None
}

/// A country name within `CONTEXT_WINDOW` chars of a location keyword.
/// This is what makes aggregated search snippets count as evidence;
/// a bare country mention in a news snippet does not.
pub fn country_near_context(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();

    let keyword_positions: Vec<usize> = LOCATION_CONTEXT
        .iter()
        .flat_map(|kw| lower.match_indices(kw).map(|(i, _)| i).collect::<Vec<_>>())
        .collect();
    if keyword_positions.is_empty() {
        return None;
    }

    for &country in COUNTRIES {
        let needle = country.to_lowercase();
        for (pos, _) in lower.match_indices(&needle) {
            if keyword_positions
                .iter()
                .any(|&kp| pos.abs_diff(kp) <= CONTEXT_WINDOW)
            {
                return Some(country);
            }
        }
    }
    None
}

/// First phone-looking substring in the text, trimmed.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// US state abbreviation from "City, ST 12345" address phrasing.
pub fn us_state(text: &str) -> Option<String> {
    US_ZIP_RE
        .find(text)
        .map(|m| m.as_str()[..2].to_string())
}
