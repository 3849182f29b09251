//! Chat session state
//!
//! A [`Session`] owns everything a conversation mutates: the database, the
//! question counter, the log of unanswered questions and the contributions
//! made while it runs. Nothing is persisted; [`Session::export`] produces the
//! audit document on demand.

use serde::Serialize;
use tracing::{debug, info};

use crate::database::Database;
use crate::error::SessionError;
use crate::export::ExportDocument;
use crate::matcher::Matcher;
use crate::models::{Contribution, DiagnosticRecord, UnansweredQuestion};

/// Behaviour switches for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Merge a recurring unanswered question into its earlier entry instead
    /// of logging a new one
    pub merge_duplicates: bool,
}

/// Outcome of asking a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<'a> {
    /// Blank input, nothing was counted or recorded
    Empty,
    Diagnostic(&'a DiagnosticRecord),
    Unanswered(&'a UnansweredQuestion),
}

/// Counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub diagnostics: usize,
    pub total_questions: usize,
    pub unanswered: usize,
    pub contributions: usize,
}

#[derive(Debug)]
pub struct Session {
    database: Database,
    matcher: Matcher,
    options: SessionOptions,
    total_questions: usize,
    unanswered: Vec<UnansweredQuestion>,
    contributions: Vec<Contribution>,
}

impl Session {
    pub fn new(database: Database, matcher: Matcher, options: SessionOptions) -> Self {
        Self {
            database,
            matcher,
            options,
            total_questions: 0,
            unanswered: Vec::new(),
            contributions: Vec::new(),
        }
    }

    /// Answer a user question.
    ///
    /// Non-blank questions are counted. When nothing matches, the question is
    /// added to the unanswered log.
    pub fn ask(&mut self, query: &str) -> Answer<'_> {
        let query = query.trim();
        if query.is_empty() {
            return Answer::Empty;
        }

        self.total_questions += 1;

        if let Some(record) = self.matcher.best_match(query, &self.database) {
            debug!(key = %record.key, "matched diagnostic");
            return Answer::Diagnostic(record);
        }

        let index = record_unanswered(&mut self.unanswered, query, self.options.merge_duplicates);
        let question = &self.unanswered[index];
        info!(
            id = %question.id,
            count = question.occurrence_count,
            "recorded unanswered question"
        );
        Answer::Unanswered(question)
    }

    /// Add a record to the database, optionally resolving an unanswered
    /// question.
    ///
    /// Nothing changes if the question id is unknown or the record is rejected.
    pub fn contribute(
        &mut self,
        record: DiagnosticRecord,
        question_id: Option<&str>,
    ) -> Result<&Contribution, SessionError> {
        let question_index = match question_id {
            Some(id) => Some(
                self.unanswered
                    .iter()
                    .position(|q| q.id == id)
                    .ok_or_else(|| SessionError::UnknownQuestion(id.to_string()))?,
            ),
            None => None,
        };

        let contribution = Contribution::new(
            record.key.clone(),
            record.contributor.clone(),
            question_id.map(String::from),
        );
        self.database.insert(record)?;

        if let Some(index) = question_index {
            self.unanswered.remove(index);
        }

        info!(key = %contribution.record_key, "recorded contribution");
        self.contributions.push(contribution);

        let index = self.contributions.len() - 1;
        Ok(&self.contributions[index])
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Unanswered questions in the order they were first asked
    pub fn unanswered(&self) -> &[UnansweredQuestion] {
        &self.unanswered
    }

    /// Unanswered questions, most asked first (stable for equal counts)
    pub fn unanswered_by_frequency(&self) -> Vec<&UnansweredQuestion> {
        let mut sorted: Vec<_> = self.unanswered.iter().collect();
        sorted.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
        sorted
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn stats(&self) -> Statistics {
        Statistics {
            diagnostics: self.database.len(),
            total_questions: self.total_questions,
            unanswered: self.unanswered.len(),
            contributions: self.contributions.len(),
        }
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument::new(
            self.unanswered.clone(),
            self.contributions.clone(),
            self.stats(),
        )
    }
}

/// Log a question and return its index in `log`
fn record_unanswered(log: &mut Vec<UnansweredQuestion>, text: &str, merge: bool) -> usize {
    if merge {
        if let Some(index) = log.iter().position(|q| q.is_same_question(text)) {
            log[index].record_occurrence();
            return index;
        }
    }

    log.push(UnansweredQuestion::new(text));
    log.len() - 1
}
