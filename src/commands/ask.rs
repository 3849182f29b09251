//! `botia ask` - answer a single question

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::common::{load_runtime, GlobalArgs};
use crate::matcher::MatchScore;
use crate::models::{DiagnosticRecord, Severity, UnansweredQuestion};
use crate::render::{format_diagnostic, format_export_success, format_no_match, format_ranking};
use crate::session::{Answer, Session};

/// A ranked candidate in `--json` output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub key: String,
    pub title: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub score: MatchScore,
}

/// Machine-readable answer printed by `botia ask --json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskReport {
    pub query: String,
    pub diagnostic: Option<DiagnosticRecord>,
    pub candidates: Vec<CandidateReport>,
    pub total_matches: usize,
    pub clarification: Option<String>,
    pub unanswered_question: Option<UnansweredQuestion>,
}

impl AskReport {
    pub fn build(session: &mut Session, query: &str, top: usize) -> Self {
        let ranking = session.matcher().rank(query, session.database(), top);
        let candidates = ranking
            .candidates()
            .iter()
            .map(|c| CandidateReport {
                key: c.record.key.clone(),
                title: c.record.title.clone(),
                severity: c.record.severity,
                score: c.score.clone(),
            })
            .collect();
        let total_matches = ranking.total_matches();
        let clarification = ranking.clarification().map(String::from);

        let (diagnostic, unanswered_question) = match session.ask(query) {
            Answer::Empty => (None, None),
            Answer::Diagnostic(record) => (Some(record.clone()), None),
            Answer::Unanswered(question) => (None, Some(question.clone())),
        };

        Self {
            query: query.trim().to_string(),
            diagnostic,
            candidates,
            total_matches,
            clarification,
            unanswered_question,
        }
    }
}

/// Ask `query` and render the reply, including runners-up up to `top`
pub fn respond(session: &mut Session, query: &str, top: usize) -> String {
    let extras = {
        let ranking = session.matcher().rank(query, session.database(), top);
        format_ranking(&ranking)
    };

    match session.ask(query) {
        Answer::Empty => String::new(),
        Answer::Diagnostic(record) => {
            let mut output = format_diagnostic(record);
            if !extras.is_empty() {
                output.push_str("\n\n");
                output.push_str(&extras);
            }
            output
        }
        Answer::Unanswered(question) => format_no_match(question),
    }
}

/// Answer a question from the command line
pub fn execute(
    global: &GlobalArgs,
    query: String,
    top: Option<usize>,
    json: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let mut runtime = load_runtime(global)?;
    let top = top.unwrap_or(runtime.config.matching.top).max(1);

    if json {
        let report = AskReport::build(&mut runtime.session, &query, top);
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize answer")?;
        println!("{output}");
    } else {
        println!("{}", respond(&mut runtime.session, &query, top));
    }

    if let Some(dir) = export {
        let path = runtime.session.export().write_to_dir(&dir)?;
        // stdout may be carrying JSON
        eprintln!("{}", format_export_success(&path));
    }

    Ok(())
}
