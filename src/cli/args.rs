//! CLI argument definitions using clap
//!
//! Commands:
//! - showdb start [--config <path>] [--host <host>] [--port <port>] [--seed <path>] [--verbose]
//! - showdb check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// showdb - in-memory shows API
#[derive(Parser, Debug)]
#[command(name = "showdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults to ./showdb.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long, env = "SHOWDB_PORT")]
        port: Option<u16>,

        /// JSON fixture to seed the datastore with
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Log every event, including per-record mutations
        #[arg(long, short)]
        verbose: bool,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_flags() {
        let cli = Cli::try_parse_from([
            "showdb", "start", "--port", "9000", "--seed", "shows.json", "-v",
        ])
        .unwrap();
        match cli.command {
            Command::Start {
                port,
                seed,
                verbose,
                config,
                host,
            } => {
                assert_eq!(port, Some(9000));
                assert_eq!(seed, Some(PathBuf::from("shows.json")));
                assert!(verbose);
                assert!(config.is_none());
                assert!(host.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_config_requires_path() {
        assert!(Cli::try_parse_from(["showdb", "check-config"]).is_err());
        assert!(Cli::try_parse_from(["showdb", "check-config", "--config", "a.json"]).is_ok());
    }
}
