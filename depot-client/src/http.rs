//! HTTP transport for the hosted store

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error body returned by the store on non-2xx responses.
#[derive(serde::Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl StoreErrorBody {
    fn into_message(self, fallback: &str) -> String {
        self.message
            .or(self.details)
            .or(self.hint)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Low-level REST transport: table reads and procedure calls.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestTransport {
    /// Create a new transport from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// Read rows from a table with PostgREST query pairs
    /// (`select`, `order`, `limit`, column filters).
    pub async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Vec<T>> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let request = self.authed(self.client.get(&url).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Call a stored procedure with a JSON argument object.
    pub async fn rpc<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        name: &str,
        params: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, name);
        let request = self.authed(self.client.post(&url).json(params));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = match serde_json::from_str::<StoreErrorBody>(&text) {
                Ok(body) => body.into_message(&text),
                Err(_) => text,
            };
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}
