//! `botia validate` - check a diagnostic database

use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::common::{open_database, GlobalArgs};
use crate::config::resolve_config;
use crate::database::Database;
use crate::matcher::normalize;

/// Quality warnings for a database that loaded successfully.
///
/// Structural errors (duplicate keys, records without keywords, malformed
/// JSON) already fail the load itself.
pub fn audit(database: &Database) -> Vec<String> {
    let mut warnings = Vec::new();

    for record in database {
        if record.causes.is_empty() {
            warnings.push(format!("'{}' lists no causes", record.key));
        }
        if record.solutions.is_empty() {
            warnings.push(format!("'{}' lists no solutions", record.key));
        }
        if record.title.trim().is_empty() {
            warnings.push(format!("'{}' has an empty title", record.key));
        }
    }

    // Shared keywords make the owning records tie on that keyword
    let mut owners: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for record in database {
        for keyword in &record.keywords {
            let keyword = normalize(keyword.trim());
            if keyword.is_empty() {
                continue;
            }
            let keys = owners.entry(keyword).or_default();
            if !keys.contains(&record.key.as_str()) {
                keys.push(&record.key);
            }
        }
    }
    for (keyword, keys) in owners {
        if keys.len() > 1 {
            warnings.push(format!(
                "keyword '{keyword}' is shared by {}",
                keys.join(", ")
            ));
        }
    }

    warnings
}

/// Load a database and report problems
pub fn execute(global: &GlobalArgs, path: Option<PathBuf>) -> Result<()> {
    let path = match path.or_else(|| global.database.clone()) {
        Some(path) => Some(path),
        None => resolve_config(global.config.as_deref())?.database.path,
    };

    let label = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in database".to_string());
    println!("{} {}", "Validating".bold(), label);

    let database = open_database(path.as_deref())?;
    println!(
        "  {} diagnostics, {} keywords, version {}",
        database.len(),
        database.keyword_count(),
        database.version().unwrap_or("N/A")
    );

    let warnings = audit(&database);
    if warnings.is_empty() {
        println!("\n{}", "All checks passed!".green().bold());
    } else {
        for warning in &warnings {
            println!("  {} {warning}", "WARN:".yellow().bold());
        }
        println!(
            "\n{} {}",
            "Found".yellow().bold(),
            format!("{} warning(s)", warnings.len()).yellow().bold()
        );
    }

    Ok(())
}
