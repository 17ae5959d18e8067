use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ChatMessage;

/// Serializable transcript snapshot handed to the user as a local file.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptExport {
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub messages: Vec<ChatMessage>,
}

impl TranscriptExport {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            export_date: Utc::now().to_rfc3339(),
            messages,
        }
    }

    /// `chat-export-YYYY-MM-DD.json`, dated from the export timestamp.
    pub fn file_name(&self) -> String {
        let date = DateTime::parse_from_rfc3339(&self.export_date)
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| Utc::now().format("%Y-%m-%d").to_string());
        format!("chat-export-{}.json", date)
    }

    /// Write the export under `dir` and return the full path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(&self)
            .context("Failed to serialize transcript export")?;

        let path = dir.join(self.file_name());
        fs::write(&path, json)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        Ok(path)
    }
}
