//! Application configuration

use depot_client::ClientConfig;

/// Runtime configuration, loaded from the environment.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DEPOT_STORE_URL | http://localhost:54321 | Store base URL |
/// | DEPOT_STORE_KEY | (empty) | API key for REST reads and procedures |
/// | DEPOT_TIMEOUT_SECS | 30 | Request timeout in seconds |
/// | DEPOT_LOG | info | Log filter (tracing env-filter syntax) |
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_key: String,
    pub timeout_secs: u64,
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("DEPOT_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            store_key: std::env::var("DEPOT_STORE_KEY").unwrap_or_default(),
            timeout_secs: std::env::var("DEPOT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_filter: std::env::var("DEPOT_LOG").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Client configuration for the hosted store
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.store_url)
            .with_api_key(&self.store_key)
            .with_timeout(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
