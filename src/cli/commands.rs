//! CLI command implementations
//!
//! `serve` boots the whole service: config, extraction, store, HTTP loop.
//! `ingest` runs the extraction once and writes the artifact.

use std::path::Path;
use std::sync::Arc;

use crate::auth::CredentialTable;
use crate::config::Config;
use crate::ingest;
use crate::observability::Logger;
use crate::server::{AppState, HttpServer};
use crate::store::{Record, TransactionStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse command line arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Ingest { config } => ingest_once(&config),
    }
}

/// Load config, seed the store from the SMS export, and serve until killed.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let path = config_path.display().to_string();
    Logger::info("CONFIG_LOADED", &[("path", path.as_str())]);

    let records = load_seed(&config);
    let count = records.len().to_string();
    Logger::info("STORE_SEEDED", &[("count", count.as_str())]);

    let store = TransactionStore::from_records(records);
    let credentials = CredentialTable::new(config.credentials.clone());
    let state = Arc::new(AppState::new(store, credentials));
    let server = HttpServer::with_config(config.server.clone(), state);

    let addr = server.socket_addr();
    Logger::info("SERVER_START", &[("addr", addr.as_str())]);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Run the extraction once and write the JSON artifact; failures are fatal
/// here, unlike the serve path.
pub fn ingest_once(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let records = ingest::extract_records(Path::new(&config.data.xml_path))?;
    ingest::write_artifact(&records, Path::new(&config.data.artifact_path))?;

    let count = records.len().to_string();
    Logger::info(
        "INGEST_COMPLETE",
        &[
            ("artifact", config.data.artifact_path.as_str()),
            ("count", count.as_str()),
        ],
    );
    println!(
        "Parsed {} transactions from {}",
        records.len(),
        config.data.xml_path
    );

    Ok(())
}

/// Extraction for serving: a missing or unreadable export degrades to an
/// empty store rather than refusing to start, and a failed artifact write
/// never blocks the server.
fn load_seed(config: &Config) -> Vec<Record> {
    let records = match ingest::extract_records(Path::new(&config.data.xml_path)) {
        Ok(records) => records,
        Err(err) => {
            let reason = err.to_string();
            Logger::warn("INGEST_FAILED", &[("reason", reason.as_str())]);
            return Vec::new();
        }
    };

    if let Err(err) = ingest::write_artifact(&records, Path::new(&config.data.artifact_path)) {
        let reason = err.to_string();
        Logger::warn("ARTIFACT_WRITE_FAILED", &[("reason", reason.as_str())]);
    }

    records
}
