//! showdb CLI entry point
//!
//! Argument parsing, configuration and serving all live in the `cli` module;
//! this only reports the error and sets the exit code.

use showdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
