use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO-8601 UTC
    role: String,
    text: String,
}

/// Append-only JSONL log of everything the session saw: messages in both
/// directions, history loads, clears, and surfaced errors.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current UTC time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("chatline-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single entry. Write failures go to stderr, never up.
    pub async fn log(&mut self, role: &str, text: &str) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            role: role.to_string(),
            text: text.to_string(),
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_land_as_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();

        logger.log("user", "Hello").await;
        logger.log("error", "send failed: busy").await;
        logger.shutdown().await;

        let written = std::fs::read_to_string(logger.path()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["role"], "user");
        assert_eq!(first["text"], "Hello");
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["role"], "error");
    }

    #[tokio::test]
    async fn logging_after_shutdown_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();

        logger.shutdown().await;
        logger.log("user", "dropped").await;

        let written = std::fs::read_to_string(logger.path()).unwrap();
        assert!(written.is_empty());
    }
}
