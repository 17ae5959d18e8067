use serde::Deserialize;

use super::types::{ChatMessage, Role};

/// Response to POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
}

/// Response to GET /api/history.
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub messages: Vec<HistoryEntry>,
}

/// One stored message as the backend returns it. The server also attaches an
/// `id` per message; nothing client-side needs it.
#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Role,
    pub timestamp: String,
}

impl From<HistoryEntry> for ChatMessage {
    fn from(entry: HistoryEntry) -> Self {
        ChatMessage {
            role: entry.kind,
            text: entry.message,
            timestamp: entry.timestamp,
        }
    }
}
