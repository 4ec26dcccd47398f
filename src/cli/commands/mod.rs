//! CLI command implementations

mod info;
mod plot;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Plot(args) => plot::run_plot(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}
