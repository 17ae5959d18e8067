// Application entry modes - interactive REPL and one-shot send
pub mod oneshot;
pub mod repl;

pub use oneshot::run_message_mode;
pub use repl::{run_repl_mode, TerminalUi};
