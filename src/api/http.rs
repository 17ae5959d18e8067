use async_trait::async_trait;

use super::{BackendError, ChatBackend};
use crate::config::ClientConfig;
use crate::models::{ChatMessage, HistoryResponse, SendMessageRequest, SendMessageResponse};

/// reqwest-backed implementation of [`ChatBackend`].
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn health_check(&self) -> Result<(), BackendError> {
        let response = self.client.get(self.endpoint("/api/health")).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(())
    }

    async fn fetch_history(&self) -> Result<Vec<ChatMessage>, BackendError> {
        let response = self
            .client
            .get(self.endpoint("/api/history"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        let history: HistoryResponse = response.json().await?;
        Ok(history.messages.into_iter().map(ChatMessage::from).collect())
    }

    async fn send_message(&self, text: &str) -> Result<String, BackendError> {
        let request = SendMessageRequest {
            message: text.to_string(),
        };
        let response = self
            .client
            .post(self.endpoint("/api/chat"))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        let reply: SendMessageResponse = response.json().await?;
        if reply.success {
            Ok(reply.response.unwrap_or_default())
        } else {
            Err(BackendError::Rejected(
                reply
                    .error
                    .unwrap_or_else(|| "unknown backend error".to_string()),
            ))
        }
    }

    async fn clear_history(&self) -> Result<(), BackendError> {
        let response = self.client.post(self.endpoint("/api/clear")).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(())
    }
}
