//! JSON export of a session's unanswered questions and contributions

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Contribution, UnansweredQuestion};
use crate::session::Statistics;

/// File name prefix of exported documents
pub const EXPORT_FILE_PREFIX: &str = "botia-diagnostic-export";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatistics {
    pub total_questions: usize,
    pub unanswered_count: usize,
    pub contributions_count: usize,
}

impl From<Statistics> for ExportStatistics {
    fn from(stats: Statistics) -> Self {
        Self {
            total_questions: stats.total_questions,
            unanswered_count: stats.unanswered,
            contributions_count: stats.contributions,
        }
    }
}

/// Audit document written by `/export` and `--export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub unanswered_questions: Vec<UnansweredQuestion>,
    pub contributions: Vec<Contribution>,
    pub statistics: ExportStatistics,
}

impl ExportDocument {
    pub fn new(
        unanswered_questions: Vec<UnansweredQuestion>,
        contributions: Vec<Contribution>,
        stats: Statistics,
    ) -> Self {
        Self {
            export_date: Utc::now(),
            unanswered_questions,
            contributions,
            statistics: stats.into(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export document")
    }

    /// `botia-diagnostic-export-YYYY-MM-DD.json`, dated by the export date
    pub fn file_name(&self) -> String {
        format!(
            "{EXPORT_FILE_PREFIX}-{}.json",
            self.export_date.format("%Y-%m-%d")
        )
    }

    /// Write the document into `dir`, creating it if needed
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

        let path = dir.join(self.file_name());
        fs::write(&path, self.to_json_pretty()?)
            .with_context(|| format!("Failed to write export {}", path.display()))?;

        info!(
            path = %path.display(),
            unanswered = self.statistics.unanswered_count,
            "wrote export"
        );
        Ok(path)
    }
}
