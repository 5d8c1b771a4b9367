//! VitalMesh backend HTTP client

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::ApiError;
use crate::config::ApiConfig;

/// VitalMesh API client
///
/// One shared `reqwest::Client` with a uniform timeout. Every wrapper
/// issues exactly one request and never retries or caches.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Error body shapes the backend uses: FastAPI `detail` or a plain `message`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

impl ApiClient {
    /// Create a client with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, Duration::from_secs(10), Duration::from_secs(5))
    }

    /// Create a client with explicit timeouts
    pub fn with_timeouts(
        base_url: impl Into<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new()); // Fallback if config fails

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_timeouts(
            config.base_url.clone(),
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Backend HTTP error: {}", e);
                return Err(ApiError::from_transport(e));
            }
        };

        Self::decode(response).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = match self.client.post(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Backend HTTP error: {}", e);
                return Err(ApiError::from_transport(e));
            }
        };

        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Backend HTTP error: {}", e);
                return Err(ApiError::from_transport(e));
            }
        };

        Self::decode(response).await
    }

    /// Turn a response into the expected envelope or a normalized error
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.detail))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })
    }
}
