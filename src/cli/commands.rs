//! CLI command implementations
//!
//! Settings resolve in three layers: built-in defaults, then the config file,
//! then command-line flags (`--port` may also come from `SHOWDB_PORT`).

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::datastore::{InMemoryDatastore, Store};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};
use crate::shows::COLLECTION;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./showdb.json";

/// Flag values that override the config file
#[derive(Debug, Clone, Default)]
pub struct StartOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<PathBuf>,
    pub verbose: bool,
}

/// Run a CLI command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start {
            config,
            host,
            port,
            seed,
            verbose,
        } => start(
            config.as_deref(),
            StartOverrides {
                host,
                port,
                seed,
                verbose,
            },
        ),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Resolve configuration, seed the datastore and serve until Ctrl-C
pub fn start(config_path: Option<&Path>, overrides: StartOverrides) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(config_path, overrides)?;
    Logger::set_min_severity(effective_severity(&config)?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", &config.host),
            ("port", &config.port.to_string()),
            ("log_level", &config.log_level),
        ],
    );

    let store = open_store(&config)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("cannot start runtime: {}", e)))?;
    runtime
        .block_on(HttpServer::with_config(config, store).start())
        .map_err(|e| CliError::boot_failed(format!("server error: {}", e)))
}

/// Load a config file and print the effective settings as JSON
pub fn check_config(path: &Path) -> CliResult<()> {
    let config = HttpServerConfig::from_file(path)?;
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Defaults, then the config file, then flags
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: StartOverrides,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            HttpServerConfig::from_file(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(seed) = overrides.seed {
        config.seed_path = Some(seed);
    }
    if overrides.verbose {
        config.log_level = Severity::Trace.as_str().to_string();
    }

    effective_severity(&config)?;
    Ok(config)
}

fn effective_severity(config: &HttpServerConfig) -> CliResult<Severity> {
    Ok(config.log_severity()?)
}

/// Empty store, or one seeded from `seed_path`
pub fn open_store(config: &HttpServerConfig) -> CliResult<Store> {
    let Some(path) = &config.seed_path else {
        return Ok(Arc::new(InMemoryDatastore::new()));
    };

    let store = InMemoryDatastore::from_path(path)?;
    let count = store.len(COLLECTION)?.to_string();
    log_event_with_fields(
        Event::StoreSeeded,
        &[("path", &path.display().to_string()), ("shows", &count)],
    );
    Ok(Arc::new(store))
}
