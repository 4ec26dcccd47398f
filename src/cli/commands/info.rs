//! Info command implementation

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::{log, LogLevel};
use crate::dataset::{format_group_key, Dataset};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let dataset = Dataset::from_csv(&args.file).map_err(|e| format!("Dataset error: {e}"))?;
    let summary = dataset.summary();

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Dataset Info:");
            println!();
            println!("Source: {}", summary.source.display());
            println!("Rows: {}", summary.rows);
            println!("Metric columns: {}", summary.metric_columns.join(", "));
            println!("Categories: {}", summary.categories.join(", "));
            println!(
                "Group keys: {}",
                summary
                    .group_keys
                    .iter()
                    .map(|k| format_group_key(*k))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
