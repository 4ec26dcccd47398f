//! Graficar CLI
//!
//! One-shot batch tool: read benchmark CSV tables, write one PNG bar chart
//! per input.
//!
//! # Usage
//!
//! ```bash
//! # Render charts next to the inputs
//! graficar plot benchmark_results_deque.csv benchmark_results_queue.csv
//!
//! # Collect the images somewhere else
//! graficar plot results/*.csv --output-dir charts/
//!
//! # Inspect a table without rendering
//! graficar info benchmark_results_deque.csv --format json
//! ```

use clap::Parser;
use graficar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
