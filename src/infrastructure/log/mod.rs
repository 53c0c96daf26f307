//! Deploy Log Implementations
//!
//! Provides concrete implementations of DeployLog:
//! - ConsoleLog: plain lines for humans
//! - JsonLog: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleLog;
pub use json::JsonLog;
