//! `botia list` and `botia show`

use anyhow::{bail, Result};
use colored::Colorize;

use super::common::{load_runtime, GlobalArgs};
use crate::render::{format_diagnostic, format_record_row};

/// List every diagnostic in insertion order
pub fn list(global: &GlobalArgs) -> Result<()> {
    let runtime = load_runtime(global)?;
    let database = runtime.session.database();

    if database.is_empty() {
        println!("{} No diagnostics in the database", "─".dimmed());
        return Ok(());
    }

    println!(
        "{} ({} diagnostics, {} keywords)",
        "Diagnostics".bold(),
        database.len(),
        database.keyword_count()
    );
    for record in database {
        println!("  {}", format_record_row(record));
    }

    Ok(())
}

/// Show one diagnostic with its keywords
pub fn show(global: &GlobalArgs, key: String) -> Result<()> {
    let runtime = load_runtime(global)?;

    let Some(record) = runtime.session.database().get(&key) else {
        bail!("No diagnostic with key '{key}'. Run 'botia list' to see available keys.");
    };

    println!("{}", format_diagnostic(record));
    println!();
    println!("{} {}", "Keywords:".cyan().bold(), record.keywords.join(", "));

    Ok(())
}
