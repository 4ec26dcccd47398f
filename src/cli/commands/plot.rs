//! Plot command implementation

use crate::cli::args::PlotArgs;
use crate::cli::logging::{log, LogLevel};
use crate::config::PlotConfig;
use crate::dataset::Dataset;
use crate::error::GraficarError;
use crate::render::{title_for, ChartRenderer};
use std::fs;
use std::path::{Path, PathBuf};

/// Render one chart per input file, in argument order.
///
/// A fatal error in one file aborts that file only; the loop continues
/// with the next input and the command fails at the end if anything did.
pub fn run_plot(args: PlotArgs, level: LogLevel) -> Result<(), String> {
    let config = PlotConfig::default();
    let renderer = ChartRenderer::new(&config);

    if let Some(dir) = &args.output_dir {
        ensure_output_dir(dir).map_err(|e| e.to_string())?;
    }

    let mut failures = 0usize;
    for file in &args.files {
        match plot_file(&renderer, file, args.output_dir.as_deref(), level) {
            Ok(out) => log(
                level,
                LogLevel::Normal,
                &format!("Saved visualization: {}", out.display()),
            ),
            Err(e) => {
                eprintln!("Error: {}: {e}", file.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        Err(format!("{failures} of {} file(s) failed", args.files.len()))
    } else {
        Ok(())
    }
}

fn plot_file(
    renderer: &ChartRenderer<'_>,
    file: &Path,
    output_dir: Option<&Path>,
    level: LogLevel,
) -> crate::error::Result<PathBuf> {
    let dataset = Dataset::from_csv(file)?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "{}: {} rows, {} categories, {} group(s), {} metric column(s)",
            file.display(),
            dataset.rows().len(),
            dataset.categories().len(),
            dataset.group_keys().len(),
            dataset.metric_columns().len()
        ),
    );

    let out = output_path(file, output_dir);
    renderer.render(&dataset, &title_for(&out), &out)?;
    Ok(out)
}

/// Create the output directory if it does not exist yet.
fn ensure_output_dir(dir: &Path) -> crate::error::Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        GraficarError::io(format!("creating output directory {}", dir.display()), e)
    })
}

/// Output artifact path: input with the extension replaced by `png`,
/// optionally rehomed under `output_dir`.
fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let out = input.with_extension("png");
    match (output_dir, out.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("results/bench_deque.csv"), None),
            PathBuf::from("results/bench_deque.png")
        );
    }

    #[test]
    fn test_output_path_honors_output_dir() {
        assert_eq!(
            output_path(Path::new("results/bench_deque.csv"), Some(Path::new("out"))),
            PathBuf::from("out/bench_deque.png")
        );
    }

    #[test]
    fn test_ensure_output_dir_creates_nested_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("charts").join("deque");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_reports_io_context() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("occupied");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let err = ensure_output_dir(&blocker).unwrap_err();
        assert!(matches!(err, GraficarError::Io { .. }));
        assert!(err.to_string().contains("output directory"));
    }
}
