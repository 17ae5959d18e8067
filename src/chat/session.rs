use std::path::{Path, PathBuf};

use crate::api::ChatBackend;
use crate::logging::ConversationLogger;
use crate::models::{ChatMessage, Role};
use crate::ui::ChatUi;

use super::export::TranscriptExport;
use super::transcript::{Transcript, WELCOME_TEXT};

/// Where the session is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingHealthCheck,
    AwaitingResponse,
}

/// Prompt shown before wiping the backend history.
pub const CLEAR_PROMPT: &str = "Clear the whole chat history?";

/// Owns the transcript and drives one backend call at a time.
///
/// Backend and UI are injected capabilities; the session never touches a
/// socket or a terminal itself. At most one send is outstanding:
/// `AwaitingResponse` turns further sends into no-ops.
pub struct ChatSession<B, U> {
    backend: B,
    ui: U,
    transcript: Transcript,
    state: SessionState,
    pub logger: Option<ConversationLogger>,
}

impl<B: ChatBackend, U: ChatUi> ChatSession<B, U> {
    pub fn new(backend: B, ui: U) -> Self {
        Self {
            backend,
            ui,
            transcript: Transcript::new(),
            state: SessionState::Idle,
            logger: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    /// Health check, then history load. Failures degrade instead of
    /// aborting: a dead backend leaves an interactive session whose health
    /// is simply unknown.
    pub async fn initialize(&mut self, skip_history: bool) {
        self.state = SessionState::AwaitingHealthCheck;
        match self.backend.health_check().await {
            Ok(()) => {
                if !skip_history {
                    self.load_history().await;
                }
            }
            Err(e) => {
                self.log("error", &format!("health check failed: {}", e)).await;
                self.ui.notify_error(
                    "The chat backend is not responding. You can keep typing, but delivery is not guaranteed.",
                );
            }
        }
        self.state = SessionState::Idle;

        if self.transcript.is_empty() {
            self.append(ChatMessage::now(Role::Bot, WELCOME_TEXT)).await;
        }
    }

    /// Replace the transcript with stored history. An empty history and any
    /// failure both leave the transcript untouched; failures are silent at
    /// the UI level and only reach the log.
    pub async fn load_history(&mut self) {
        match self.backend.fetch_history().await {
            Ok(messages) if !messages.is_empty() => {
                self.transcript.replace(messages);
                self.ui.transcript_replaced(self.transcript.messages());
                self.log(
                    "system",
                    &format!("loaded {} stored messages", self.transcript.len()),
                )
                .await;
            }
            Ok(_) => {}
            Err(e) => {
                self.log("error", &format!("history load failed: {}", e)).await;
            }
        }
    }

    /// Append the user message, then wait for the bot reply.
    ///
    /// Blank input and an in-flight send are both silent no-ops. The user
    /// message is appended before the request goes out and stays in the
    /// transcript even when the send fails; only the reply is missing then.
    pub async fn send_message(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() || self.state == SessionState::AwaitingResponse {
            return;
        }

        self.append(ChatMessage::now(Role::User, text)).await;
        self.state = SessionState::AwaitingResponse;
        self.ui.typing_started();

        match self.backend.send_message(text).await {
            Ok(reply) => {
                self.ui.typing_stopped();
                self.append(ChatMessage::now(Role::Bot, reply)).await;
            }
            Err(e) => {
                self.ui.typing_stopped();
                self.log("error", &format!("send failed: {}", e)).await;
                self.ui
                    .notify_error("Failed to send the message. Please try again.");
            }
        }
        self.state = SessionState::Idle;
    }

    /// Ask for confirmation, then wipe the backend history and reset the
    /// transcript to the greeting. Declined or failed, nothing changes.
    pub async fn clear_chat(&mut self) {
        if !self.ui.confirm(CLEAR_PROMPT) {
            return;
        }

        match self.backend.clear_history().await {
            Ok(()) => {
                self.transcript.reset_to_welcome();
                self.ui.transcript_replaced(self.transcript.messages());
                self.log("system", "chat history cleared").await;
            }
            Err(e) => {
                self.log("error", &format!("clear failed: {}", e)).await;
                self.ui.notify_error("Failed to clear the chat history.");
            }
        }
    }

    /// Write the transcript as a dated JSON file under `dir`. No backend
    /// call is made and the transcript is not touched.
    pub async fn export_chat(&mut self, dir: &Path) -> Option<PathBuf> {
        if self.transcript.is_empty() {
            self.ui.notify_error("There are no messages to export.");
            return None;
        }

        let export = TranscriptExport::new(self.transcript.messages().to_vec());
        match export.save(dir) {
            Ok(path) => {
                self.log("system", &format!("exported transcript to {}", path.display()))
                    .await;
                Some(path)
            }
            Err(e) => {
                self.log("error", &format!("export failed: {}", e)).await;
                self.ui.notify_error("Failed to write the export file.");
                None
            }
        }
    }

    async fn append(&mut self, message: ChatMessage) {
        self.log(message.role.as_str(), &message.text).await;
        self.ui.message_added(&message);
        self.transcript.push(message);
    }

    async fn log(&mut self, role: &str, text: &str) {
        if let Some(logger) = &mut self.logger {
            logger.log(role, text).await;
        }
    }
}
