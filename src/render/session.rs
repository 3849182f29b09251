use colored::Colorize;
use std::path::Path;

use super::truncate_for_display;
use crate::models::{Contribution, UnansweredQuestion};
use crate::session::Statistics;

/// Reply shown when no diagnostic matched
pub fn format_no_match(question: &UnansweredQuestion) -> String {
    let mut lines = vec![
        format!(
            "😕 {}",
            "No diagnostic found for this problem in the database.".yellow()
        ),
        format!(
            "✨ Your question has been recorded {} to help enrich the database.",
            format!("[{}]", question.id).dimmed()
        ),
    ];

    if question.occurrence_count > 1 {
        lines.push(format!(
            "   Asked {} times so far.",
            question.occurrence_count
        ));
    }

    lines.push(String::new());
    lines.push(format!("💡 {}", "In the meantime:".bold()));
    lines.push("  • Consult a professional for an accurate diagnosis".to_string());
    lines.push("  • Write down every symptom you noticed".to_string());
    lines.push("  • Check fluid levels".to_string());

    lines.join("\n")
}

pub fn format_stats(stats: &Statistics) -> String {
    [
        "Session statistics".bold().to_string(),
        format!("  Diagnostics:   {}", stats.diagnostics),
        format!("  Questions:     {}", stats.total_questions),
        format!("  Unanswered:    {}", stats.unanswered),
        format!("  Contributions: {}", stats.contributions),
    ]
    .join("\n")
}

/// Pending questions, expected most asked first
pub fn format_unanswered_list(questions: &[&UnansweredQuestion]) -> String {
    if questions.is_empty() {
        return format!("{} No pending questions", "─".dimmed());
    }

    let mut lines = vec![format!("{} ({})", "Unanswered questions".bold(), questions.len())];
    for question in questions {
        lines.push(format!(
            "  {} {}",
            question.created_at.format("%Y-%m-%d").to_string().dimmed(),
            truncate_for_display(&question.question_text, 60)
        ));
        lines.push(format!(
            "    {} asked {} time(s)",
            question.id.cyan(),
            question.occurrence_count
        ));
    }

    lines.join("\n")
}

pub fn format_contribution_success(contribution: &Contribution) -> String {
    let mut message = format!(
        "{} Added diagnostic '{}' (by {})",
        "✅".green(),
        contribution.record_key.cyan(),
        contribution.contributor
    );
    if let Some(question_id) = &contribution.question_id {
        message.push_str(&format!("\n  resolves question {}", question_id.dimmed()));
    }
    message
}

pub fn format_export_success(path: &Path) -> String {
    format!("📥 {} {}", "Export written to".green(), path.display())
}
