//! Argument validators shared by the CLI.

/// Upper bound for `--top`
pub const MAX_TOP: usize = 50;

/// Check a diagnostic key for lookup.
///
/// Same rule as [`crate::Database::insert`]: any non-blank key, accented ones included.
pub fn validate_key(key: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("Key cannot be empty".to_string());
    }
    Ok(())
}

/// clap value parser for diagnostic keys
pub fn clap_key_validator(s: &str) -> Result<String, String> {
    validate_key(s)?;
    Ok(s.to_string())
}

/// clap value parser for `--top`
pub fn clap_top_validator(s: &str) -> Result<usize, String> {
    let top: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a positive number"))?;
    if top == 0 || top > MAX_TOP {
        return Err(format!("--top must be between 1 and {MAX_TOP}"));
    }
    Ok(top)
}
