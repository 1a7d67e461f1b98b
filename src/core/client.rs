//! HTTP access to the DeepL API

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::DeeplConfig;
use crate::core::errors::{DeeplError, Result};

/// Request-execution capability the node depends on.
///
/// The node never talks to the network directly; hosts (and tests) hand it an
/// implementation of this trait. Authentication is the implementor's concern.
#[async_trait]
pub trait ApiRequester: Send + Sync {
    /// Issue `method endpoint?query` against the API and return the decoded JSON body
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value>;
}

/// reqwest-backed DeepL client
#[derive(Debug, Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    config: Arc<DeeplConfig>,
}

impl DeeplClient {
    /// Create a new client
    pub fn new(config: DeeplConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url(),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ApiRequester for DeeplClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value> {
        let url = self.url(endpoint);
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.config.api_key),
            )
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeeplError::TimeoutError
                } else {
                    DeeplError::NetworkError {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| DeeplError::InvalidResponseError {
                    message: e.to_string(),
                });
        }

        let status_code = status.as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let error_text = response.text().await.unwrap_or_default();

        warn!("DeepL request to {} failed with status {}", url, status_code);

        Err(match status_code {
            403 => DeeplError::AuthError,
            429 => DeeplError::RateLimitError { retry_after },
            456 => DeeplError::QuotaExceededError,
            _ => DeeplError::ApiError {
                status: status_code,
                message: error_message(&error_text),
            },
        })
    }
}

/// DeepL reports errors as `{"message": "..."}`; fall back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
