//! Client struct, endpoint building, and response checks.

use crate::ChatError;

use super::config::HttpClientConfig;

pub(crate) const CHAT_PATH: &str = "chat";
pub(crate) const HEALTH_PATH: &str = "health";
pub(crate) const EVAL_PATH: &str = "eval";

/// Longest error body kept in a [`ChatError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Answer-service client over HTTP.
pub struct HttpAnswerClient {
    pub(crate) config: HttpClientConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpAnswerClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ChatError::Setup(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Join `path` onto the base URL, tolerating a trailing slash.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-2xx response into [`ChatError::Status`].
    pub(crate) async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(ChatError::Status {
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        })
    }

    /// Read the whole body and decode it as JSON.
    pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ChatError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ChatError::Decode(e.to_string()))
    }
}
