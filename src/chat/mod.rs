// Chat module - session state machine, transcript, and export
pub mod export;
pub mod session;
pub mod transcript;

// Re-export commonly used items
pub use export::TranscriptExport;
pub use session::{ChatSession, SessionState, CLEAR_PROMPT};
pub use transcript::{Transcript, WELCOME_TEXT};
