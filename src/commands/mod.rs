//! Command implementations behind the `botia` binary.
//!
//! Commands:
//! - `botia ask <query>` - Answer one question
//! - `botia chat` - Interactive session
//! - `botia list` - List diagnostics
//! - `botia show <key>` - Show one diagnostic
//! - `botia validate [--database <path>]` - Check a database file

pub mod ask;
pub mod chat;
pub mod common;
pub mod records;
pub mod validate;

pub use common::{load_runtime, GlobalArgs, Runtime};
