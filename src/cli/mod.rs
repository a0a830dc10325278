//! CLI module for showdb
//!
//! Provides command-line interface for:
//! - start: Resolve configuration, seed the datastore, serve HTTP
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{
    check_config, open_store, resolve_config, run_command, start, StartOverrides,
    DEFAULT_CONFIG_PATH,
};
pub use errors::{CliError, CliErrorCode, CliResult};

use crate::observability::{log_event_with_fields, Event};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let result = run_command(cli.command);
    if let Err(e) = &result {
        log_event_with_fields(
            Event::BootFailed,
            &[("code", e.code().code()), ("message", e.message())],
        );
    }
    result
}
