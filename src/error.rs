//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for graficar operations.
pub type Result<T> = std::result::Result<T, GraficarError>;

/// Errors that can occur while ingesting or rendering benchmark tables.
///
/// Each variant carries enough context to point at the offending file,
/// column, or group directly.
#[derive(Error, Debug)]
pub enum GraficarError {
    /// Required column missing from the input table.
    #[error("Required column '{column}' not found in {path}\n  → Expected columns: Type, Size, and Time (or Time1/Time2/Time3)")]
    MissingColumn { column: String, path: PathBuf },

    /// Non-numeric value in a numeric column.
    #[error("Invalid value '{value}' in column '{column}' at line {line}\n  → Size and timing values must be numeric")]
    InvalidValue {
        column: String,
        line: usize,
        value: String,
    },

    /// Input has headers but no measurement rows.
    #[error("No data rows in {path}\n  → The file has headers but no measurements")]
    EmptyDataset { path: PathBuf },

    /// A group's minimum timing is zero or absent, so percentages are undefined.
    #[error("Degenerate baseline in group {group} for metric '{metric}'\n  → The minimum timing is zero or the group is empty; check the input for bad measurements")]
    DegenerateBaseline { group: String, metric: String },

    /// Reader-level CSV failure (malformed record, unreadable file).
    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Chart backend failure while drawing or persisting the artifact.
    #[error("Chart rendering failed: {message}")]
    Render { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl GraficarError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a render error from any backend error message.
    pub fn render(message: impl ToString) -> Self {
        Self::Render {
            message: message.to_string(),
        }
    }

    /// Check if this error points at bad input data rather than an
    /// environment failure.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::InvalidValue { .. }
                | Self::EmptyDataset { .. }
                | Self::DegenerateBaseline { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_is_actionable() {
        let err = GraficarError::MissingColumn {
            column: "Size".to_string(),
            path: "bench.csv".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Size"));
        assert!(msg.contains("bench.csv"));
        assert!(msg.contains("→"));
    }

    #[test]
    fn test_invalid_value_names_column_and_line() {
        let err = GraficarError::InvalidValue {
            column: "Time1".to_string(),
            line: 7,
            value: "fast".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Time1"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("fast"));
    }

    #[test]
    fn test_data_error_classification() {
        let data = GraficarError::EmptyDataset {
            path: "x.csv".into(),
        };
        assert!(data.is_data_error());

        let env = GraficarError::render("backend closed");
        assert!(!env.is_data_error());
    }
}
