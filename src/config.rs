use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::StrategyKind;

/// Config file looked up in the current directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "botia.toml";

/// Ranking size used by `ask` when neither the config nor the CLI sets one
pub const DEFAULT_TOP: usize = 3;

/// Parsed botia.toml. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub matching: MatchingConfig,
    pub questions: QuestionsConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// JSON database file; the built-in records are used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub strategy: StrategyKind,
    pub top: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Substring,
            top: DEFAULT_TOP,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    pub merge_duplicates: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse botia.toml")
    }

    /// Resolve a relative database path against the config file's directory
    fn anchor_paths(mut self, base: &Path) -> Self {
        if let Some(path) = self.database.path.take() {
            self.database.path = Some(if path.is_relative() {
                base.join(path)
            } else {
                path
            });
        }
        self
    }
}

/// Load and parse a config file
///
/// # Returns
/// * `Ok(Some(Config))` - Config loaded and parsed successfully
/// * `Ok(None)` - Config file doesn't exist
/// * `Err(_)` - Failed to read or parse config
pub fn load_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = Config::from_toml_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(Some(config.anchor_paths(base)))
}

/// Load the config named on the command line, or `./botia.toml` if present.
///
/// An explicitly named file must exist; the implicit one is optional.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path)?
            .ok_or_else(|| anyhow::anyhow!("Config file not found: {}", path.display())),
        None => Ok(load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default()),
    }
}
