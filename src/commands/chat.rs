//! `botia chat` - interactive session
//!
//! Plain lines are questions. Lines starting with `/` are session commands;
//! `quit`, `exit` or `q` end the session.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::ask::respond;
use super::common::{load_runtime, GlobalArgs};
use crate::models::DiagnosticRecord;
use crate::render::{
    format_contribution_success, format_export_success, format_stats, format_unanswered_list,
};
use crate::session::Session;

const PROMPT: &str = "🚗 > ";

const HELP: &str = "\
Describe your car problem in plain words, or use:
  /stats                         Session statistics
  /unanswered                    Questions without a diagnostic, most asked first
  /export [DIR]                  Write the session export as JSON
  /contribute <FILE> [QUESTION]  Add a diagnostic from a JSON file, optionally
                                 resolving an unanswered question by id
  /help                          This help
  quit | exit | q                Leave";

/// Settings for the interactive loop
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub top: usize,
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatInput<'a> {
    Blank,
    Quit,
    Command(ChatCommand),
    Question(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatCommand {
    Help,
    Stats,
    Unanswered,
    Export(Option<PathBuf>),
    Contribute {
        file: PathBuf,
        question_id: Option<String>,
    },
    Unknown(String),
}

fn parse_line(line: &str) -> ChatInput<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ChatInput::Blank;
    }
    if matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q") {
        return ChatInput::Quit;
    }

    let Some(command) = line.strip_prefix('/') else {
        return ChatInput::Question(line);
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));
    let command = match name.to_lowercase().as_str() {
        "help" | "?" => ChatCommand::Help,
        "stats" => ChatCommand::Stats,
        "unanswered" => ChatCommand::Unanswered,
        "export" => ChatCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "contribute" if rest.is_empty() => {
            ChatCommand::Unknown("/contribute needs a JSON file".to_string())
        }
        "contribute" => {
            let (file, question_id) = split_question_id(rest);
            ChatCommand::Contribute {
                file: PathBuf::from(file),
                question_id: question_id.map(String::from),
            }
        }
        other => ChatCommand::Unknown(format!("Unknown command '/{other}'")),
    };
    ChatInput::Command(command)
}

/// Split `<file> [question-id]`. The last word is a question id only when it
/// parses as a UUID, so the file path may contain spaces.
fn split_question_id(args: &str) -> (&str, Option<&str>) {
    match args.rsplit_once(char::is_whitespace) {
        Some((file, id)) if Uuid::parse_str(id).is_ok() => (file.trim_end(), Some(id)),
        _ => (args, None),
    }
}

/// Read a contributed diagnostic from a JSON file
fn read_record(path: &Path) -> Result<DiagnosticRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid diagnostic in {}", path.display()))
}

fn handle_command<W: Write>(
    session: &mut Session,
    command: ChatCommand,
    output: &mut W,
    settings: &ChatSettings,
) -> Result<()> {
    match command {
        ChatCommand::Help => writeln!(output, "{HELP}")?,
        ChatCommand::Stats => writeln!(output, "{}", format_stats(&session.stats()))?,
        ChatCommand::Unanswered => writeln!(
            output,
            "{}",
            format_unanswered_list(&session.unanswered_by_frequency())
        )?,
        ChatCommand::Export(dir) => {
            let dir = dir.unwrap_or_else(|| settings.export_dir.clone());
            let path = session.export().write_to_dir(&dir)?;
            writeln!(output, "{}", format_export_success(&path))?;
        }
        ChatCommand::Contribute { file, question_id } => {
            let record = read_record(&file)?;
            let contribution = session.contribute(record, question_id.as_deref())?;
            writeln!(output, "{}", format_contribution_success(contribution))?;
        }
        ChatCommand::Unknown(message) => bail!("{message}. Type /help for commands."),
    }
    Ok(())
}

/// Run the chat loop until `quit` or end of input.
///
/// Command failures are reported inline and do not end the session.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    settings: &ChatSettings,
) -> Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        match parse_line(&line) {
            ChatInput::Blank => {}
            ChatInput::Quit => {
                writeln!(output, "👋 Goodbye!")?;
                return Ok(());
            }
            ChatInput::Command(command) => {
                if let Err(e) = handle_command(session, command, output, settings) {
                    writeln!(output, "{} {e:#}", "Error:".red().bold())?;
                }
            }
            ChatInput::Question(question) => {
                writeln!(output, "\n{}\n", respond(session, question, settings.top))?;
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

/// Start an interactive session on stdin/stdout
pub fn execute(global: &GlobalArgs, export_on_exit: Option<PathBuf>) -> Result<()> {
    let mut runtime = load_runtime(global)?;
    let settings = ChatSettings {
        top: runtime.config.matching.top.max(1),
        export_dir: runtime.config.export.dir.clone(),
    };

    println!("{}", "👋 Welcome to BotIA Diagnostic Auto!".bold().blue());
    println!("{}", "=".repeat(50));
    println!(
        "I look for your problem in {} local diagnostics. Questions I cannot answer are",
        runtime.session.database().len()
    );
    println!("recorded so contributors can add answers later. Type /help for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(&mut runtime.session, stdin.lock(), &mut stdout, &settings)?;

    if let Some(dir) = export_on_exit {
        let path = runtime.session.export().write_to_dir(&dir)?;
        println!("{}", format_export_success(&path));
    }

    Ok(())
}
