use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{resolve_config, Config};
use crate::database::{load_database, Database};
use crate::matcher::{Matcher, StrategyKind};
use crate::session::{Session, SessionOptions};

/// Flags accepted by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Config file (defaults to ./botia.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON diagnostic database to use instead of the built-in records
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Only match keywords on whole-word boundaries
    #[arg(long, global = true)]
    pub whole_word: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Resolved configuration plus the session built from it
#[derive(Debug)]
pub struct Runtime {
    pub config: Config,
    pub session: Session,
}

/// Build a session from the config file and command-line overrides
pub fn load_runtime(args: &GlobalArgs) -> Result<Runtime> {
    let config = resolve_config(args.config.as_deref())?;

    let database_path = args
        .database
        .as_deref()
        .or(config.database.path.as_deref());
    let database = open_database(database_path)?;

    let strategy = if args.whole_word {
        StrategyKind::WholeWord
    } else {
        config.matching.strategy
    };
    let options = SessionOptions {
        merge_duplicates: config.questions.merge_duplicates,
    };

    debug!(
        %strategy,
        merge_duplicates = options.merge_duplicates,
        diagnostics = database.len(),
        "session ready"
    );

    let session = Session::new(database, Matcher::from_kind(strategy), options);
    Ok(Runtime { config, session })
}

/// Load a database file, or the built-in records when no path is given
pub fn open_database(path: Option<&Path>) -> Result<Database> {
    match path {
        Some(path) => load_database(path),
        None => Database::builtin().context("Built-in diagnostic database is invalid"),
    }
}
