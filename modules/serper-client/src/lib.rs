pub mod error;

pub use error::{Result, SerperError};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Date-restriction window passed to Serper via `tbs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recency {
    PastYear,
    PastTwoYears,
    PastFiveYears,
}

impl Recency {
    fn tbs(&self) -> &'static str {
        match self {
            Recency::PastYear => "qdr:y",
            Recency::PastTwoYears => "qdr:y2",
            Recency::PastFiveYears => "qdr:y5",
        }
    }
}

/// One ranked organic search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SearchItem>,
}

pub struct SerperClient {
    api_key: String,
    client: reqwest::Client,
}

impl SerperClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(api_key: &str, timeout: Duration) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Issue one search query. Returns ranked organic results only;
    /// knowledge graphs, images etc. are not part of this contract.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        recency: Option<Recency>,
    ) -> Result<Vec<SearchItem>> {
        if self.api_key.is_empty() {
            return Err(SerperError::MissingApiKey);
        }

        info!(query, max_results, "Serper search");

        let mut body = serde_json::json!({
            "q": query,
            "num": max_results,
        });
        if let Some(r) = recency {
            body["tbs"] = serde_json::Value::String(r.tbs().to_string());
        }

        let resp = self
            .client
            .post("https://google.serper.dev/search")
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: SerperResponse = serde_json::from_str(&resp.text().await?)?;

        info!(query, count = data.organic.len(), "Serper search complete");
        Ok(data.organic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recency_maps_to_tbs_values() {
        assert_eq!(Recency::PastYear.tbs(), "qdr:y");
        assert_eq!(Recency::PastTwoYears.tbs(), "qdr:y2");
        assert_eq!(Recency::PastFiveYears.tbs(), "qdr:y5");
    }

    #[tokio::test]
    async fn empty_key_fails_before_any_request() {
        let client = SerperClient::new("");
        let err = client.search("acme", 10, None).await.unwrap_err();
        assert!(matches!(err, SerperError::MissingApiKey));
    }

    #[test]
    fn organic_results_deserialize_with_optional_fields() {
        let json = r#"{"organic":[
            {"title":"Acme expands","snippet":"Acme opens new plant","link":"https://reuters.com/a","date":"2 weeks ago","position":1},
            {"title":"Acme hiring","snippet":"50 roles","link":"https://indeed.com/x"}
        ]}"#;
        let resp: SerperResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.organic.len(), 2);
        assert_eq!(resp.organic[0].position, Some(1));
        assert!(resp.organic[1].date.is_none());
    }
}
