//! CLI command implementations
//!
//! Both commands load the catalog file first; a load failure ends the
//! process before anything is served.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use super::args::{Command, SearchArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use crate::catalog::{load_catalog, CatalogStore};
use crate::http_server::HttpServer;
use crate::query::{QueryEngine, SearchCriteria};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, data, port } => serve(config.as_deref(), data, port),
        Command::Search {
            config,
            data,
            query,
        } => search(config.as_deref(), data, &query),
    }
}

/// Load the catalog and serve the HTTP API until stopped
pub fn serve(config_path: Option<&Path>, data: Option<PathBuf>, port: Option<u16>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(data, port)?;
    init_logging(&config.log_filter);

    let records = load_catalog(&config.data_file)?;
    let store = Arc::new(CatalogStore::from_records(records)?);
    let server = HttpServer::with_store(config.server.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Run one search against the catalog file and print the matches as JSON
pub fn search(config_path: Option<&Path>, data: Option<PathBuf>, args: &SearchArgs) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(data, None)?;
    init_logging(&config.log_filter);

    let criteria = SearchCriteria::from_params(&args.to_params())?;
    let records = load_catalog(&config.data_file)?;
    let matches = QueryEngine::search(&records, &criteria)?;

    write_json(&matches)
}

/// Install the global subscriber. RUST_LOG wins over the configured filter.
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::errors::CliErrorCode;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Bulbasaur", "types": ["Grass", "Poison"], "total": 318,
         "hp": 45, "attack": 49, "defense": 49, "attack_special": 65,
         "defense_special": 65, "speed": 45, "evolution_id": 2}
    ]"#;

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_search_matches() {
        let file = catalog_file();
        let args = SearchArgs {
            types: Some("Grass".to_string()),
            ..Default::default()
        };
        search(None, Some(file.path().to_path_buf()), &args).unwrap();
    }

    #[test]
    fn test_search_no_match() {
        let file = catalog_file();
        let args = SearchArgs {
            types: Some("Fire".to_string()),
            ..Default::default()
        };
        let err = search(None, Some(file.path().to_path_buf()), &args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NoMatch);
    }

    #[test]
    fn test_search_invalid_flag_value() {
        let file = catalog_file();
        let args = SearchArgs {
            evo: Some("maybe".to_string()),
            ..Default::default()
        };
        let err = search(None, Some(file.path().to_path_buf()), &args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidQuery);
    }

    #[test]
    fn test_serve_fails_on_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = serve(None, Some(dir.path().join("absent.json")), Some(0)).unwrap_err();
        // Port 0 is rejected before the catalog is touched.
        assert_eq!(err.code(), &CliErrorCode::ConfigError);

        let err = serve(None, Some(dir.path().join("absent.json")), None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::LoadFailed);
    }
}
