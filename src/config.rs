use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Default backend address, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client-side settings resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the chat backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Where `/export` writes its files.
    pub export_dir: PathBuf,
    /// Extra stderr diagnostics.
    pub verbose: bool,
}

impl ClientConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: normalize_base_url(&cli.api_url),
            request_timeout: Duration::from_secs(cli.timeout),
            export_dir: cli.export_dir.clone(),
            verbose: cli.verbose,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            export_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

/// Normalize the backend URL so endpoint paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
