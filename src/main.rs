//! pokedex CLI entry point
//!
//! All logic is delegated to the CLI module; this only reports errors and
//! sets the exit code.

use pokedex::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
