//! Keyword overlap scoring of queries against diagnostic records
//!
//! Each keyword found in the query adds twice its word count to a record's
//! score, and a query containing the record's title earns a flat bonus. The
//! highest scoring record wins; ties go to the record inserted first.
//!
//! # Example
//!
//! ```ignore
//! use botia::{Database, Matcher};
//!
//! let database = Database::builtin()?;
//! let matcher = Matcher::default();
//!
//! match matcher.best_match("mon voyant moteur est allumé", &database) {
//!     Some(record) => println!("{}", record.title),
//!     None => println!("no match"),
//! }
//! ```

mod ranking;
mod strategy;

pub use ranking::{MatchScore, Ranking, ScoredRecord};
pub use strategy::{MatchStrategy, StrategyKind, Substring, WholeWord};

use crate::models::DiagnosticRecord;

/// Points per word of a matched keyword
pub const KEYWORD_WORD_POINTS: u32 = 2;

/// Flat bonus when the query contains the record title
pub const TITLE_BONUS: u32 = 3;

/// Scores queries against records through a replaceable [`MatchStrategy`]
pub struct Matcher {
    strategy: Box<dyn MatchStrategy>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Substring)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Matcher {
    pub fn new(strategy: impl MatchStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Substring => Self::new(Substring),
            StrategyKind::WholeWord => Self::new(WholeWord),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Score a single record against a query
    pub fn score(&self, query: &str, record: &DiagnosticRecord) -> MatchScore {
        self.score_normalized(&normalize(query), record)
    }

    /// Return the best scoring record, or `None` when nothing scores above zero
    pub fn best_match<'a, I>(&self, query: &str, records: I) -> Option<&'a DiagnosticRecord>
    where
        I: IntoIterator<Item = &'a DiagnosticRecord>,
    {
        let query = normalize(query);
        let mut best: Option<&'a DiagnosticRecord> = None;
        let mut best_score = 0;

        for record in records {
            let score = self.score_normalized(&query, record).score;
            // Strictly greater keeps the earliest record on ties
            if score > best_score {
                best_score = score;
                best = Some(record);
            }
        }

        best
    }

    /// Rank every record scoring above zero, best first, keeping at most `top_n`
    pub fn rank<'a, I>(&self, query: &str, records: I, top_n: usize) -> Ranking<'a>
    where
        I: IntoIterator<Item = &'a DiagnosticRecord>,
    {
        let query = normalize(query);
        let candidates = records
            .into_iter()
            .map(|record| ScoredRecord {
                record,
                score: self.score_normalized(&query, record),
            })
            .filter(|candidate| candidate.score.score > 0)
            .collect();

        Ranking::new(candidates, top_n)
    }

    fn score_normalized(&self, query: &str, record: &DiagnosticRecord) -> MatchScore {
        let mut result = MatchScore::default();

        for keyword in &record.keywords {
            let keyword_norm = normalize(keyword);
            let words = word_count(&keyword_norm);
            if words == 0 {
                continue;
            }
            if self.strategy.contains(query, &keyword_norm) {
                result.score += words * KEYWORD_WORD_POINTS;
                result.matched_keywords.push(keyword.clone());
            }
        }

        let title_norm = normalize(&record.title);
        if !title_norm.trim().is_empty() && self.strategy.contains(query, &title_norm) {
            result.score += TITLE_BONUS;
            result.title_bonus = true;
        }

        result
    }
}

/// Lowercase form used for every comparison
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

fn word_count(phrase: &str) -> u32 {
    phrase.split_whitespace().count() as u32
}
