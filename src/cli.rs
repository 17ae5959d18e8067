use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_BASE_URL;

/// CLI arguments for chatline
#[derive(Parser)]
#[command(name = "chatline")]
#[command(about = "Talk to a chat-bot backend from the terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the chat backend
    #[arg(long, value_name = "URL", env = "CHATLINE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", env = "CHATLINE_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Directory where /export writes transcript files
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub export_dir: PathBuf,

    /// Directory for conversation logs; logging is off when not set
    #[arg(long, value_name = "PATH", env = "CHATLINE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Send a single message, print the reply, and exit
    #[arg(long, short = 'm', value_name = "TEXT")]
    pub message: Option<String>,

    /// Skip loading stored history on startup
    #[arg(long)]
    pub no_history: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
