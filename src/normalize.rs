//! Baseline-relative percentage computation.
//!
//! Within one group and one metric, the fastest implementation defines the
//! 100% baseline and every other timing is expressed relative to it.
//! Groups are normalized independently; nothing crosses group boundaries.

use crate::dataset::Row;
use crate::error::{GraficarError, Result};

/// Compute baseline-relative percentages for the rows of one group and one
/// metric column.
///
/// Returns `(category, percentage)` pairs in row order. The baseline is the
/// minimum timing among the given rows for that metric; the row attaining
/// it maps to exactly 100.0 and no row maps below 100. Categories without a
/// row in this group are simply absent from the output.
///
/// # Errors
///
/// [`GraficarError::DegenerateBaseline`] if the group has no rows for this
/// metric or the minimum timing is not strictly positive. Percentages are
/// undefined in that case, so the group fails fast instead of dividing by
/// zero.
pub fn baseline_percentages(
    rows: &[&Row],
    metric: usize,
    group: &str,
    metric_name: &str,
) -> Result<Vec<(String, f64)>> {
    let values: Vec<(&str, f64)> = rows
        .iter()
        .filter_map(|row| row.times.get(metric).map(|v| (row.category.as_str(), *v)))
        .collect();

    let baseline = values
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::INFINITY, f64::min);

    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(GraficarError::DegenerateBaseline {
            group: group.to_string(),
            metric: metric_name.to_string(),
        });
    }

    // Divide before scaling: value/baseline is exactly 1.0 for the baseline
    // row, so its percentage is exactly 100.0 with no rounding drift.
    Ok(values
        .into_iter()
        .map(|(category, value)| (category.to_string(), value / baseline * 100.0))
        .collect())
}
