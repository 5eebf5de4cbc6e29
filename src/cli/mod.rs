//! CLI module for folio
//!
//! Provides command-line interface for:
//! - validate: Check a content document against the profile schema
//! - render: Validate, then write the page view model as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{BuildArgs, Cli, Command, ContentArgs};
pub use commands::{render, run, run_command, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_report, write_response};
