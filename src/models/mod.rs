// Data models - the domain message plus the backend wire format
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used items
pub use requests::SendMessageRequest;
pub use responses::{HistoryEntry, HistoryResponse, SendMessageResponse};
pub use types::{ChatMessage, Role};
