use crate::models::{ChatMessage, Role};

/// Greeting shown when the session has no stored history.
pub const WELCOME_TEXT: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Ordered, append-only log of the current session's messages.
///
/// Mutation is limited to appending, wholesale replacement from stored
/// history, and the reset after a clear.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Replace the whole transcript with backend-provided history,
    /// preserving its order and timestamps.
    pub fn replace(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Reset to the single welcome greeting.
    pub fn reset_to_welcome(&mut self) {
        self.messages = vec![ChatMessage::now(Role::Bot, WELCOME_TEXT)];
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::now(Role::User, "first"));
        transcript.push(ChatMessage::now(Role::Bot, "second"));

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn replace_swaps_the_whole_log() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::now(Role::Bot, "old"));

        let stored = vec![
            ChatMessage::now(Role::User, "a"),
            ChatMessage::now(Role::Bot, "b"),
        ];
        transcript.replace(stored.clone());
        assert_eq!(transcript.messages(), stored.as_slice());
    }

    #[test]
    fn reset_leaves_exactly_the_greeting() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::now(Role::User, "hello"));
        transcript.push(ChatMessage::now(Role::Bot, "hi"));

        transcript.reset_to_welcome();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Bot);
        assert_eq!(transcript.messages()[0].text, WELCOME_TEXT);
    }
}
