// Identity & locale resolution: a rejection gate followed by an ordered
// strategy chain. First writer wins on every field: once the city rule
// sets a country, no DDI, search snippet, or page pattern overwrites it.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use leadsignal_common::{safety, CompanyIdentity, Config, IdentitySource, LeadSignalError};
use serper_client::SerperClient;

use crate::geo;
use crate::page;
use crate::traits::{EvidenceSearch, HttpPageFetcher, PageFetcher};

/// How many aggregated-search queries to try for country evidence.
const SEARCH_QUERY_LIMIT: usize = 3;
/// Results per aggregated-search query.
const SEARCH_RESULT_LIMIT: usize = 5;

pub struct Resolver {
    search: Arc<dyn EvidenceSearch>,
    fetcher: Arc<dyn PageFetcher>,
}

impl Resolver {
    pub fn new(search: Arc<dyn EvidenceSearch>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { search, fetcher }
    }

    pub fn from_config(config: &Config) -> Result<Self, LeadSignalError> {
        if config.serper_api_key.trim().is_empty() {
            return Err(LeadSignalError::Config(
                "SERPER_API_KEY is not set; the identity resolver cannot aggregate search evidence"
                    .to_string(),
            ));
        }
        let client = SerperClient::with_timeout(
            &config.serper_api_key,
            Duration::from_secs(config.search_timeout_secs),
        );
        Ok(Self::new(
            Arc::new(client),
            Arc::new(HttpPageFetcher::default()),
        ))
    }

    /// Resolve canonical name and country/city/state for a URL.
    ///
    /// The rejection gate runs before any network call. A failed page
    /// fetch is partial success, not an error; whatever the query-based
    /// and pattern-based steps produced is returned.
    pub async fn resolve(
        &self,
        raw_url: &str,
        known_name: Option<&str>,
    ) -> Result<CompanyIdentity, LeadSignalError> {
        let url = normalize_url(raw_url)?;
        let host = url.host_str().unwrap_or_default().to_string();

        // Gate first: marketplaces, social content, academic publishers,
        // listing-shaped names. Terminal for this request only.
        if let Some(m) = safety::check_target(url.as_str(), known_name) {
            info!(url = url.as_str(), reason = %m.reason, "Resolution blocked");
            return Err(LeadSignalError::Blocked(m));
        }

        let mut identity = CompanyIdentity::empty();
        identity.name = known_name.map(|n| n.trim().to_string());

        let name_text = known_name.unwrap_or("");

        // --- Country, strict priority. Step 1: city-name lookup. ---
        if let Some((city, country)) = geo::city_country(name_text) {
            identity.country = Some(country.to_string());
            identity.city = Some(title_case(city));
        }

        // Step 2: dialing code in the candidate text.
        if identity.country.is_none() {
            identity.country = geo::ddi_country(name_text).map(String::from);
        }

        // Step 3: aggregated search evidence.
        let mut country_via_search = false;
        if identity.country.is_none() {
            if let Some(name) = known_name {
                if let Some(country) = self.country_from_search(name).await {
                    identity.country = Some(country.to_string());
                    country_via_search = true;
                }
            }
        }

        // Step 4: the page itself.
        match self.fetcher.fetch(url.as_str()).await {
            Ok(html) => {
                self.apply_page(&mut identity, &html, &host);
                identity.source = IdentitySource::DnsScrape;
            }
            Err(e) => {
                warn!(url = url.as_str(), error = %e, "Page fetch failed, returning partial identity");
                identity.source = if country_via_search {
                    IdentitySource::SearchAggregation
                } else {
                    IdentitySource::None
                };
            }
        }

        // Last-resort name: title-cased domain label, still gated.
        if identity.name.is_none() {
            identity.name = page::domain_label_name(&host)
                .filter(|n| safety::blocked_name(n).is_none());
        }

        Ok(identity)
    }

    /// Up to three "name + location phrasing" queries. A country counts
    /// only when it sits near a location keyword and the result does not
    /// come from a blocked source.
    async fn country_from_search(&self, name: &str) -> Option<&'static str> {
        let queries = [
            format!("\"{name}\" headquarters location"),
            format!("\"{name}\" company located country"),
            format!("where is \"{name}\" based"),
        ];

        for query in queries.iter().take(SEARCH_QUERY_LIMIT) {
            let items = match self.search.search(query, SEARCH_RESULT_LIMIT).await {
                Ok(items) => items,
                Err(e) => {
                    warn!(query = query.as_str(), error = %e, "Location search failed, trying next query");
                    continue;
                }
            };

            for item in items {
                if safety::check_target(&item.link, Some(&item.title)).is_some() {
                    continue;
                }
                let text = format!("{} {}", item.title, item.snippet);
                if let Some(country) = geo::country_near_context(&text) {
                    info!(name, country, link = item.link.as_str(), "Country from search evidence");
                    return Some(country);
                }
            }
        }
        None
    }

    /// Fill still-empty fields from the fetched page. Country checks run
    /// in order: postal code, address/city patterns, page DDI,
    /// "located in" phrasing.
    fn apply_page(&self, identity: &mut CompanyIdentity, html: &str, host: &str) {
        let text = page::visible_text(html);

        if identity.name.is_none() {
            identity.name = first_valid_name(&[
                page::site_name(html),
                page::structured_org_name(html),
                page::title_name(html),
                page::copyright_name(html),
                page::domain_label_name(host),
            ]);
        }

        if identity.phone.is_none() {
            identity.phone = geo::find_phone(&text);
        }
        if identity.email.is_none() {
            identity.email = page::find_email(&text);
        }
        if identity.address.is_none() {
            identity.address = page::find_address(&text);
        }
        if identity.state.is_none() {
            identity.state = geo::us_state(&text);
        }

        let page_city = geo::city_country(&text);
        if identity.city.is_none() {
            identity.city = page_city.map(|(city, _)| title_case(city));
        }

        if identity.country.is_none() {
            identity.country = geo::postal_country(&text)
                .or(page_city.map(|(_, country)| country))
                .or_else(|| geo::ddi_country(&text))
                .or_else(|| geo::located_in_country(&text))
                .map(String::from);
        }
    }
}

/// First candidate that survives the name gate. A listing-shaped or
/// overlong candidate is discarded, falling through to the next source.
fn first_valid_name(candidates: &[Option<String>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|n| safety::blocked_name(n.as_str()).is_none())
        .cloned()
}

/// Accepts bare domains ("acme.com") by assuming https.
fn normalize_url(raw: &str) -> Result<Url, LeadSignalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LeadSignalError::InvalidInput("url is required".to_string()));
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&with_scheme)
        .map_err(|e| LeadSignalError::InvalidInput(format!("invalid url: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(LeadSignalError::InvalidInput(format!(
            "unsupported scheme: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(LeadSignalError::InvalidInput("url has no host".to_string()));
    }
    Ok(url)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_bare_domain() {
        let url = normalize_url("acme.com/about").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("acme.com"));
    }

    #[test]
    fn normalize_rejects_empty_and_garbage() {
        assert!(normalize_url("").is_err());
        assert!(normalize_url("ftp://acme.com").is_err());
    }

    #[test]
    fn title_case_multi_word() {
        assert_eq!(title_case("sao paulo"), "Sao Paulo");
        assert_eq!(title_case("guangzhou"), "Guangzhou");
    }

    #[test]
    fn first_valid_name_skips_gated_candidates() {
        let name = first_valid_name(&[
            Some("Top 10 Pumps (2024)".to_string()),
            None,
            Some("Acme Pumps".to_string()),
        ]);
        assert_eq!(name.unwrap(), "Acme Pumps");
    }
}
