use colored::Colorize;

use super::truncate_for_display;
use crate::matcher::Ranking;
use crate::models::{DiagnosticRecord, Severity};

/// Words that flag a solution as needing immediate action
const URGENT_MARKERS: &[&str] = &["arrêt", "immédiat", "urgence", "stop", "immediately"];

fn severity_badge(severity: Severity) -> String {
    let (r, g, b) = severity.rgb();
    format!("{} {} urgency", severity.icon(), severity)
        .truecolor(r, g, b)
        .bold()
        .to_string()
}

fn is_urgent(solution: &str) -> bool {
    let lower = solution.to_lowercase();
    URGENT_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Full rendering of a diagnostic record
pub fn format_diagnostic(record: &DiagnosticRecord) -> String {
    let mut lines = vec![
        record.title.bold().to_string(),
        severity_badge(record.severity),
    ];

    if !record.causes.is_empty() {
        lines.push(String::new());
        lines.push(format!("🔍 {}", "Possible causes".cyan().bold()));
        for cause in &record.causes {
            lines.push(format!("  • {cause}"));
        }
    }

    if !record.solutions.is_empty() {
        lines.push(String::new());
        lines.push(format!("🔧 {}", "Recommended solutions".cyan().bold()));
        for solution in &record.solutions {
            if is_urgent(solution) {
                lines.push(format!("  🚨 {}", solution.red()));
            } else {
                lines.push(format!("  • {solution}"));
            }
        }
    }

    if let Some(cost) = &record.estimated_cost {
        lines.push(String::new());
        lines.push(format!("💰 {} {}", "Estimated cost:".cyan().bold(), cost.bold()));
    }

    lines.push(String::new());
    lines.push(format!("Contributed by: {}", record.contributor).dimmed().to_string());

    lines.join("\n")
}

/// Candidates after the best one, with their scores, plus the clarification
/// prompt when the top two are tied.
///
/// Runners-up with equal scores are listed most urgent first. The head is
/// never moved.
pub fn format_ranking(ranking: &Ranking<'_>) -> String {
    let mut lines = Vec::new();

    let mut others = ranking.candidates().iter().skip(1).collect::<Vec<_>>();
    others.sort_by(|a, b| {
        b.score
            .score
            .cmp(&a.score.score)
            .then_with(|| b.record.severity.weight().cmp(&a.record.severity.weight()))
    });
    if !others.is_empty() {
        lines.push(format!(
            "{} ({} matching diagnostics)",
            "Other candidates".bold(),
            ranking.total_matches()
        ));
        for (position, candidate) in others.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {} {}",
                position + 2,
                candidate.record.severity.icon(),
                candidate.record.title,
                format!("(score {})", candidate.score.score).dimmed()
            ));
        }
    }

    if let Some(prompt) = ranking.clarification() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("💬 {}", prompt.yellow()));
    }

    lines.join("\n")
}

/// One line per record for `botia list`
pub fn format_record_row(record: &DiagnosticRecord) -> String {
    let (r, g, b) = record.severity.rgb();
    let origin = if record.is_system() {
        "built-in".to_string()
    } else {
        format!("by {}", record.contributor)
    };
    format!(
        "{:<24} {:<9} {} {}",
        record.key.cyan(),
        record.severity.to_string().truecolor(r, g, b),
        truncate_for_display(&record.title, 40),
        format!("({} keywords, {origin})", record.keywords.len()).dimmed()
    )
}
