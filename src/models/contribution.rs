use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record added to the database during a session, optionally answering
/// one of the logged unanswered questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub record_key: String,
    pub question_id: Option<String>,
    pub contributor: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Contribution {
    pub fn new(
        record_key: impl Into<String>,
        contributor: impl Into<String>,
        question_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            record_key: record_key.into(),
            question_id,
            contributor: contributor.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let contribution = Contribution::new("freins", "alice", Some("q-1".to_string()));
        let value = serde_json::to_value(&contribution).unwrap();

        assert_eq!(value["recordKey"], "freins");
        assert_eq!(value["questionId"], "q-1");
        assert_eq!(value["contributor"], "alice");
        assert!(value.get("timestamp").is_some());
    }
}
