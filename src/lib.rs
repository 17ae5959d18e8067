//! chatline - a terminal client for a four-endpoint chat backend.
//!
//! The core is [`chat::ChatSession`]: it owns the transcript, enforces
//! single-flight sending, and drives one backend call at a time. Everything
//! around it is wiring - an HTTP implementation of the backend contract, a
//! terminal UI, a CLI, and an optional conversation log.

pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod ui;

// Re-exports from local modules
pub use api::{BackendError, ChatBackend, HttpBackend};
pub use chat::{ChatSession, SessionState, Transcript, TranscriptExport, WELCOME_TEXT};
pub use cli::Cli;
pub use config::{normalize_base_url, ClientConfig};
pub use logging::ConversationLogger;
pub use models::{ChatMessage, Role};
pub use ui::ChatUi;
