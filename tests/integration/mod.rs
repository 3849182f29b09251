//! Integration tests for the public botia API
//!
//! Run with: cargo test --test integration

mod database_files;
mod matching;
mod session_flow;
