use anyhow::{Context, Result};
use colored::Colorize;

use crate::api::{ChatBackend, HttpBackend};
use crate::config::ClientConfig;

/// Send a single message and print the reply.
///
/// Non-interactive counterpart of the REPL's send path: a failed health
/// check only warns, a failed send is fatal.
pub async fn run_message_mode(config: ClientConfig, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Message is empty");
    }

    let backend = HttpBackend::new(&config)?;

    if let Err(e) = backend.health_check().await {
        eprintln!(
            "{} Backend health check failed: {}",
            "⚠️".yellow(),
            e
        );
    }

    let reply = backend
        .send_message(text)
        .await
        .context("Failed to send the message")?;
    println!("{}", reply);

    Ok(())
}
