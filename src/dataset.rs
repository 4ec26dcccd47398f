//! Benchmark table ingestion.
//!
//! A [`Dataset`] is an ordered, read-only collection of measurement rows
//! loaded from a delimited file: one row per tested implementation at a
//! given input size, with one or more timing columns. Required columns are
//! `Type` (category), `Size` (numeric group key), and either `Time` or the
//! trio `Time1`/`Time2`/`Time3`.

use crate::error::{GraficarError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One measurement row. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Row {
    /// Implementation/container name being benchmarked.
    pub category: String,
    /// Group key (input size) used for x-axis bucketing.
    pub size: f64,
    /// Timing values, aligned with the dataset's metric columns.
    pub times: Vec<f64>,
}

/// Ordered collection of rows plus the metric column schema.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    metric_columns: Vec<String>,
    source: PathBuf,
}

/// Machine-readable dataset summary for `info --format json`.
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub source: PathBuf,
    pub rows: usize,
    pub metric_columns: Vec<String>,
    pub categories: Vec<String>,
    pub group_keys: Vec<f64>,
}

impl Dataset {
    /// Load a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// - [`GraficarError::MissingColumn`] if a required column is absent.
    /// - [`GraficarError::InvalidValue`] if a `Size` or timing value is not
    ///   numeric. Bad data is never silently coerced.
    /// - [`GraficarError::EmptyDataset`] if the file has no data rows.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut reader = csv::Reader::from_path(path).map_err(|e| GraficarError::Csv {
            path: path.to_path_buf(),
            message: format!("failed to open: {e}"),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| GraficarError::Csv {
                path: path.to_path_buf(),
                message: format!("failed to read headers: {e}"),
            })?
            .clone();

        let type_idx = column_index(&headers, "Type")
            .ok_or_else(|| missing_column("Type", path))?;
        let size_idx = column_index(&headers, "Size")
            .ok_or_else(|| missing_column("Size", path))?;
        let metric_columns = metric_schema(&headers, path)?;

        let mut rows = Vec::new();
        for (record_no, record) in reader.records().enumerate() {
            let record = record.map_err(|e| GraficarError::Csv {
                path: path.to_path_buf(),
                message: format!("bad record: {e}"),
            })?;
            // 1-based line number, accounting for the header row.
            let line = record_no + 2;

            let category = record.get(type_idx).unwrap_or("").to_string();
            let size = parse_numeric(record.get(size_idx), "Size", line)?;
            let times = metric_columns
                .iter()
                .map(|(name, idx)| parse_numeric(record.get(*idx), name, line))
                .collect::<Result<Vec<f64>>>()?;

            rows.push(Row {
                category,
                size,
                times,
            });
        }

        if rows.is_empty() {
            return Err(GraficarError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            rows,
            metric_columns: metric_columns.into_iter().map(|(name, _)| name).collect(),
            source: path.to_path_buf(),
        })
    }

    /// Build a dataset from rows already in memory.
    ///
    /// `metric_columns` names the timing values each row carries, in order.
    ///
    /// # Errors
    ///
    /// [`GraficarError::EmptyDataset`] if `rows` is empty.
    pub fn from_rows(
        rows: Vec<Row>,
        metric_columns: Vec<String>,
        source: impl Into<PathBuf>,
    ) -> Result<Self> {
        let source = source.into();
        if rows.is_empty() {
            return Err(GraficarError::EmptyDataset { path: source });
        }
        Ok(Self {
            rows,
            metric_columns,
            source,
        })
    }

    /// All rows in load order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Names of the timing columns, in table order.
    pub fn metric_columns(&self) -> &[String] {
        &self.metric_columns
    }

    /// Path the dataset was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.category) {
                seen.push(row.category.clone());
            }
        }
        seen
    }

    /// Distinct group keys, sorted ascending numerically.
    pub fn group_keys(&self) -> Vec<f64> {
        let mut keys: Vec<f64> = self.rows.iter().map(|r| r.size).collect();
        keys.sort_by(f64::total_cmp);
        keys.dedup_by(|a, b| a.total_cmp(b).is_eq());
        keys
    }

    /// Rows whose group key equals `key`, in dataset order.
    pub fn rows_in_group(&self, key: f64) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| r.size.total_cmp(&key).is_eq())
            .collect()
    }

    /// Summary view for the `info` command.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source: self.source.clone(),
            rows: self.rows.len(),
            metric_columns: self.metric_columns.clone(),
            categories: self.categories(),
            group_keys: self.group_keys(),
        }
    }
}

/// Format a group key the way it appeared in the input: integral sizes
/// print without a decimal point.
pub fn format_group_key(key: f64) -> String {
    if key.fract() == 0.0 && key.abs() < 1e15 {
        format!("{}", key as i64)
    } else {
        format!("{key}")
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn missing_column(column: &str, path: &Path) -> GraficarError {
    GraficarError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    }
}

/// Resolve the timing schema: a single `Time` column, or the trial trio
/// `Time1`/`Time2`/`Time3` (all three required once any is present).
fn metric_schema(
    headers: &csv::StringRecord,
    path: &Path,
) -> Result<Vec<(String, usize)>> {
    if let Some(idx) = column_index(headers, "Time") {
        return Ok(vec![("Time".to_string(), idx)]);
    }
    if column_index(headers, "Time1").is_none() {
        return Err(missing_column("Time", path));
    }
    ["Time1", "Time2", "Time3"]
        .iter()
        .map(|name| {
            column_index(headers, name)
                .map(|idx| ((*name).to_string(), idx))
                .ok_or_else(|| missing_column(name, path))
        })
        .collect()
}

fn parse_numeric(field: Option<&str>, column: &str, line: usize) -> Result<f64> {
    let text = field.unwrap_or("");
    text.trim().parse::<f64>().map_err(|_| GraficarError::InvalidValue {
        column: column.to_string(),
        line,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_single_metric_table() {
        let file = write_csv("Type,Size,Time\nA,10,5.0\nB,10,10.0\nA,100,7.5\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.rows().len(), 3);
        assert_eq!(dataset.metric_columns(), ["Time"]);
        assert_eq!(dataset.rows()[1].times, vec![10.0]);
    }

    #[test]
    fn test_loads_trial_metric_table() {
        let file = write_csv("Type,Size,Time1,Time2,Time3\nA,10,4,8,4\nB,10,8,8,8\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.metric_columns(), ["Time1", "Time2", "Time3"]);
        assert_eq!(dataset.rows()[0].times, vec![4.0, 8.0, 4.0]);
    }

    #[test]
    fn test_missing_type_column_is_schema_error() {
        let file = write_csv("Kind,Size,Time\nA,10,5\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            GraficarError::MissingColumn { ref column, .. } if column == "Type"
        ));
    }

    #[test]
    fn test_missing_time_column_is_schema_error() {
        let file = write_csv("Type,Size,Elapsed\nA,10,5\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            GraficarError::MissingColumn { ref column, .. } if column == "Time"
        ));
    }

    #[test]
    fn test_partial_trial_schema_names_missing_column() {
        let file = write_csv("Type,Size,Time1,Time2\nA,10,4,8\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            GraficarError::MissingColumn { ref column, .. } if column == "Time3"
        ));
    }

    #[test]
    fn test_non_numeric_timing_is_value_error() {
        let file = write_csv("Type,Size,Time\nA,10,fast\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        match err {
            GraficarError::InvalidValue {
                column,
                line,
                value,
            } => {
                assert_eq!(column, "Time");
                assert_eq!(line, 2);
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidValue, got {other}"),
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let file = write_csv("Type,Size,Time\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, GraficarError::EmptyDataset { .. }));
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let file = write_csv("Type,Size,Time\nB,10,1\nA,10,2\nB,100,3\nC,100,4\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.categories(), ["B", "A", "C"]);
    }

    #[test]
    fn test_group_keys_sorted_numerically() {
        let file = write_csv("Type,Size,Time\nA,1000,1\nA,10,2\nA,100,3\nA,10,4\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.group_keys(), vec![10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_rows_in_group_preserves_order() {
        let file = write_csv("Type,Size,Time\nB,10,1\nA,100,2\nA,10,3\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        let group = dataset.rows_in_group(10.0);
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].category, "B");
        assert_eq!(group[1].category, "A");
    }

    #[test]
    fn test_format_group_key_drops_trailing_zero() {
        assert_eq!(format_group_key(1000.0), "1000");
        assert_eq!(format_group_key(2.5), "2.5");
    }
}
