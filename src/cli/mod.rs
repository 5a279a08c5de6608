//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: look up one NEO by designation or name
//! - query: filter close approaches, print or write a report

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, QueryArgs};
pub use commands::{inspect, open_database, query, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::NO_MATCH;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
