//! BotIA diagnostic assistant.
//!
//! Matches free-text descriptions of car problems against a small set of
//! diagnostic records using keyword overlap scoring, and keeps an in-memory
//! log of the questions it could not answer.

pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod render;
pub mod session;
pub mod validation;

pub use database::Database;
pub use error::{DatabaseError, SessionError};
pub use matcher::{Matcher, MatchStrategy, StrategyKind};
pub use models::{Contribution, DiagnosticRecord, Severity, UnansweredQuestion};
pub use session::{Answer, Session, SessionOptions, Statistics};
