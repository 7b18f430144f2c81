//! CLI module for pokedex
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and run the HTTP API
//! - search: One-shot search printed as JSON

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SearchArgs};
pub use commands::{run, run_command, search, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
