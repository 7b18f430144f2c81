//! CLI argument definitions using clap
//!
//! Commands:
//! - pokedex serve [--config <path>] [--data <path>] [--port <n>]
//! - pokedex search [--config <path>] [--data <path>] [search flags]

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pokedex - an in-memory Pokémon catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Catalog file, overrides the configured one
        #[arg(long)]
        data: Option<PathBuf>,

        /// Port to listen on, overrides the configured one
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single search against the catalog file and exit
    Search {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Catalog file, overrides the configured one
        #[arg(long)]
        data: Option<PathBuf>,

        #[command(flatten)]
        query: SearchArgs,
    },
}

/// Search flags, named after the HTTP query parameters
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Comma-separated types that must all be present
    #[arg(long)]
    pub types: Option<String>,

    /// "true" keeps Pokémon that evolve, "false" those that don't
    #[arg(long)]
    pub evo: Option<String>,

    /// Keep Pokémon whose total is greater than this
    #[arg(long, allow_hyphen_values = true)]
    pub totalgt: Option<String>,

    /// Keep Pokémon whose total is less than this
    #[arg(long, allow_hyphen_values = true)]
    pub totallt: Option<String>,

    /// Sort field: id, name or total
    #[arg(long)]
    pub sortby: Option<String>,

    /// "desc" for descending, ascending otherwise
    #[arg(long)]
    pub order: Option<String>,
}

impl SearchArgs {
    /// Converts the flags to the raw parameter map used by the HTTP API
    pub fn to_params(&self) -> HashMap<String, String> {
        [
            ("types", &self.types),
            ("evo", &self.evo),
            ("totalgt", &self.totalgt),
            ("totallt", &self.totallt),
            ("sortby", &self.sortby),
            ("order", &self.order),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
