//! Terminal formatting of answers, rankings and session statistics.

mod diagnostic;
mod session;

pub use diagnostic::{format_diagnostic, format_ranking, format_record_row};
pub use session::{
    format_contribution_success, format_export_success, format_no_match, format_stats,
    format_unanswered_list,
};

/// Truncate `text` to at most `max_chars` characters, adding an ellipsis
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
