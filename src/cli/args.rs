//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Graficar: benchmark bar-chart visualization
#[derive(Parser, Debug, Clone)]
#[command(name = "graficar")]
#[command(version)]
#[command(about = "Render grouped bar charts of baseline-relative benchmark timings")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render one chart per input table
    Plot(PlotArgs),

    /// Summarize a table without rendering
    Info(InfoArgs),
}

/// Arguments for the plot command
#[derive(Parser, Debug, Clone)]
pub struct PlotArgs {
    /// Input CSV files, processed in order
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Directory for output images (default: alongside each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Input CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Parse CLI arguments from an iterator (testable entry point).
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
