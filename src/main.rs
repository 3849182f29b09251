use anyhow::Result;
use botia::commands::{ask, chat, records, validate, GlobalArgs};
use botia::logging;
use botia::validation::{clap_key_validator, clap_top_validator};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "botia")]
#[command(about = "Automotive diagnostic assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        /// Description of the problem
        query: String,

        /// Number of candidates to show (1-50)
        #[arg(short, long, value_parser = clap_top_validator)]
        top: Option<usize>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,

        /// Write the session export into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Start an interactive session
    Chat {
        /// Write the session export into this directory on exit
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// List all diagnostics
    List,

    /// Show a diagnostic by key
    Show {
        /// Diagnostic key, as shown by `botia list`
        #[arg(value_parser = clap_key_validator)]
        key: String,
    },

    /// Check a diagnostic database file
    Validate {
        /// Database file (defaults to --database, then the config, then built-in)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match cli.command {
        Commands::Ask {
            query,
            top,
            json,
            export,
        } => ask::execute(&cli.global, query, top, json, export),
        Commands::Chat { export } => chat::execute(&cli.global, export),
        Commands::List => records::list(&cli.global),
        Commands::Show { key } => records::show(&cli.global, key),
        Commands::Validate { path } => validate::execute(&cli.global, path),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "botia", &mut std::io::stdout());
            Ok(())
        }
    }
}
