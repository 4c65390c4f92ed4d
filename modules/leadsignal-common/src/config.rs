use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Serper API key. May be empty at load time; the engine rejects with
    /// a configuration error at use, so the API can answer 500 with an
    /// explicit message instead of crashing at boot.
    pub serper_api_key: String,

    // Web server
    pub api_host: String,
    pub api_port: u16,

    // Search discipline
    pub search_timeout_secs: u64,
    pub search_delay_ms: u64,
    pub max_results_per_query: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            serper_api_key: env::var("SERPER_API_KEY").unwrap_or_default(),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: parsed_env("API_PORT", 3000),
            search_timeout_secs: parsed_env("SEARCH_TIMEOUT_SECS", 30),
            search_delay_ms: parsed_env("SEARCH_DELAY_MS", 400),
            max_results_per_query: parsed_env("MAX_RESULTS_PER_QUERY", 10),
        }
    }
}

fn parsed_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(v) => v
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a number, got: {v}")),
        Err(_) => default,
    }
}
