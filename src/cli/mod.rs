//! CLI module
//!
//! Provides the command-line interface:
//! - serve: load config, seed the store from the SMS export, serve HTTP
//! - ingest: one-shot extraction plus JSON artifact

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{ingest_once, run, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
