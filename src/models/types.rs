use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

/// A single transcript entry. Immutable once appended; insertion order is
/// chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// ISO-8601 timestamp string.
    pub timestamp: String,
}

impl ChatMessage {
    /// Build a message stamped with the current UTC time.
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert_eq!(serde_json::to_value(Role::Bot).unwrap(), "bot");
        assert_eq!(
            serde_json::from_value::<Role>(serde_json::json!("bot")).unwrap(),
            Role::Bot
        );
    }

    #[test]
    fn now_produces_parseable_timestamp() {
        let message = ChatMessage::now(Role::User, "hi");
        assert!(chrono::DateTime::parse_from_rfc3339(&message.timestamp).is_ok());
    }

    #[test]
    fn message_round_trips_through_json() {
        let message = ChatMessage::now(Role::Bot, "Hello there");
        let json = serde_json::to_string(&message).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
