//! AnswerClient implementation plus the auxiliary endpoints.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::wire::{ChatReply, ChatRequest, EvalReport, HealthStatus};
use crate::{AnswerClient, ChatError};

use super::http::{HttpAnswerClient, CHAT_PATH, EVAL_PATH, HEALTH_PATH};

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, message: &str) -> Result<ChatReply, ChatError> {
        let url = self.endpoint(CHAT_PATH);
        debug!(%url, chars = message.chars().count(), "answer service request");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&ChatRequest { message })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let reply: ChatReply = Self::decode(response).await?;

        debug!(structured = reply.is_structured(), "answer service reply");
        Ok(reply)
    }
}

impl HttpAnswerClient {
    /// `GET /health`; returns the reported status string.
    pub async fn health(&self) -> Result<String, ChatError> {
        let url = self.endpoint(HEALTH_PATH);
        debug!(%url, "health check");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let health: HealthStatus = Self::decode(response).await?;
        Ok(health.status)
    }

    /// `GET /eval`; runs the backend's canned question set.
    pub async fn evaluate(&self) -> Result<EvalReport, ChatError> {
        let url = self.endpoint(EVAL_PATH);
        debug!(%url, "evaluation request");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}
