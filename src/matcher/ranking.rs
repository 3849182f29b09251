//! Score breakdowns and ranked candidate lists

use serde::Serialize;

use crate::models::DiagnosticRecord;

/// Score of one record against one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub score: u32,
    /// Keywords found in the query, in record order
    pub matched_keywords: Vec<String>,
    pub title_bonus: bool,
}

/// A record paired with its score
#[derive(Debug, Clone)]
pub struct ScoredRecord<'a> {
    pub record: &'a DiagnosticRecord,
    pub score: MatchScore,
}

/// Candidates scoring above zero, best first, ties in insertion order
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    candidates: Vec<ScoredRecord<'a>>,
    total_matches: usize,
    clarification: Option<String>,
}

impl<'a> Ranking<'a> {
    pub(super) fn new(mut candidates: Vec<ScoredRecord<'a>>, top_n: usize) -> Self {
        // Stable sort keeps insertion order among equal scores
        candidates.sort_by(|a, b| b.score.score.cmp(&a.score.score));

        let total_matches = candidates.len();
        let clarification = match candidates.as_slice() {
            [first, second, ..] if first.score.score == second.score.score => Some(format!(
                "Symptoms are ambiguous between '{}' and '{}'. Is it rather {} or {}?",
                first.record.title,
                second.record.title,
                first.record.title.to_lowercase(),
                second.record.title.to_lowercase()
            )),
            _ => None,
        };

        candidates.truncate(top_n);

        Self {
            candidates,
            total_matches,
            clarification,
        }
    }

    pub fn best(&self) -> Option<&ScoredRecord<'a>> {
        self.candidates.first()
    }

    pub fn candidates(&self) -> &[ScoredRecord<'a>] {
        &self.candidates
    }

    /// Number of records that scored above zero, before truncation
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// A follow-up question when the two best candidates are tied
    pub fn clarification(&self) -> Option<&str> {
        self.clarification.as_deref()
    }
}
