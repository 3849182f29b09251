use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question the matcher could not answer.
///
/// Field names on the wire follow the export format (`question`,
/// `timestamp`, `count`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnansweredQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "count")]
    pub occurrence_count: u32,
}

impl UnansweredQuestion {
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question_text: question_text.into(),
            created_at: Utc::now(),
            occurrence_count: 1,
        }
    }

    /// Whether `text` is the same question, ignoring case and spacing
    pub fn is_same_question(&self, text: &str) -> bool {
        comparable_question(&self.question_text) == comparable_question(text)
    }

    pub fn record_occurrence(&mut self) {
        self.occurrence_count = self.occurrence_count.saturating_add(1);
    }
}

fn comparable_question(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
