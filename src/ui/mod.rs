// UI capability surface - the session renders through this, never through a
// concrete toolkit

use crate::models::ChatMessage;

/// Rendering and notification capabilities the surrounding UI layer provides.
///
/// The session only ever talks to this trait, so the front-end can be a
/// terminal, a widget toolkit, or a recorder in tests.
pub trait ChatUi {
    /// A message was appended to the transcript.
    fn message_added(&mut self, message: &ChatMessage);

    /// The whole transcript was replaced (history load, clear).
    fn transcript_replaced(&mut self, transcript: &[ChatMessage]);

    /// A reply is pending.
    fn typing_started(&mut self);

    /// The pending reply arrived or failed.
    fn typing_stopped(&mut self);

    /// One user-visible failure notification. Every surfaced error funnels
    /// through here.
    fn notify_error(&mut self, message: &str);

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}
