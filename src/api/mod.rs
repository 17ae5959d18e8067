// Backend API module - the four-operation chat backend contract
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChatMessage;

/// Failures a chat backend can surface.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection, timeout, or malformed-body failures.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// The four operations every chat backend exposes.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// GET /api/health. Succeeds on any 2xx status.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// GET /api/history. Stored messages, oldest first.
    async fn fetch_history(&self) -> Result<Vec<ChatMessage>, BackendError>;

    /// POST /api/chat. Returns the bot reply text.
    async fn send_message(&self, text: &str) -> Result<String, BackendError>;

    /// POST /api/clear. Drops the stored history.
    async fn clear_history(&self) -> Result<(), BackendError>;
}

pub use http::HttpBackend;
