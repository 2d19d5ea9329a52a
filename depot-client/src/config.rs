//! Client configuration

/// Configuration for connecting to the hosted store.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "http://localhost:54321")
    pub base_url: String,

    /// API key, sent as both `apikey` and bearer token
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: String::new(),
            timeout: 30,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a store client from this configuration
    pub fn build(&self) -> crate::ClientResult<crate::StoreClient> {
        crate::StoreClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:54321")
    }
}
