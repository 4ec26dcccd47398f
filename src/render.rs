//! Chart rendering via plotters.
//!
//! The renderer walks groups in ascending key order and metrics in column
//! order, asks the normalizer for percentages and the layout engine for
//! positions, then draws one rectangle per category present. The drawing
//! area lives for exactly one render call, so no figure state leaks
//! between input files.

use crate::color::ColorMap;
use crate::config::PlotConfig;
use crate::dataset::{format_group_key, Dataset};
use crate::error::{GraficarError, Result};
use crate::layout::LayoutEngine;
use crate::normalize::baseline_percentages;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{IntoFont, TextStyle};
use std::collections::HashSet;
use std::path::Path;

/// Chart title from the artifact base name, underscores read as spaces.
pub fn title_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("benchmark")
        .replace('_', " ")
}

/// Bar chart renderer for one configuration.
pub struct ChartRenderer<'a> {
    config: &'a PlotConfig,
}

/// A fully positioned bar, ready to draw.
#[derive(Debug)]
struct PlacedBar {
    x: f64,
    width: f64,
    percentage: f64,
    category: String,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(config: &'a PlotConfig) -> Self {
        Self { config }
    }

    /// Render `dataset` as a grouped bar chart and persist it to `out_path`.
    ///
    /// Re-running overwrites any prior artifact at the same path. Fatal
    /// normalization errors surface before anything is drawn, so no partial
    /// artifact is written for bad input.
    pub fn render(&self, dataset: &Dataset, title: &str, out_path: &Path) -> Result<()> {
        // Canonical category list: dataset-wide first-seen order. Slot
        // indices and colors both key off it.
        let categories = dataset.categories();
        let colors = ColorMap::build(&self.config.palette, &categories);
        let group_keys = dataset.group_keys();
        let metrics = dataset.metric_columns();

        let trial_mode = metrics.len() > 1;
        let engine = if trial_mode {
            LayoutEngine::trials(
                metrics.len(),
                categories.len(),
                self.config.trial_bar_width,
                self.config.trial_spacing,
            )
        } else {
            LayoutEngine::single(categories.len(), self.config.single_bar_width)
        };

        let bars = place_bars(dataset, &group_keys, metrics, &categories, &engine)?;

        let y_max = bars
            .iter()
            .map(|b| b.percentage)
            .fold(100.0, f64::max)
            * 1.1;
        // Room under the axis line for the group-key labels.
        let y_floor = -0.06 * y_max;
        let (x_min, x_max) = engine.x_extent(group_keys.len());
        let (width, height) = if trial_mode {
            self.config.trial_figure
        } else {
            self.config.single_figure
        };

        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(GraficarError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, y_floor..y_max)
            .map_err(GraficarError::render)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .x_desc("group size")
            .y_desc("relative time (%)")
            .draw()
            .map_err(GraficarError::render)?;

        // One legend entry per category, attached the first time it is drawn.
        let legend_at: HashSet<usize> = legend_bar_indices(&bars).into_iter().collect();
        for (i, bar) in bars.iter().enumerate() {
            let color = colors.color_for(&bar.category).rgb();
            let series = chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(bar.x, 0.0), (bar.x + bar.width, bar.percentage)],
                    color.filled(),
                )))
                .map_err(GraficarError::render)?;
            if legend_at.contains(&i) {
                series.label(bar.category.clone()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
            }
        }

        let labels: Vec<String> = group_keys.iter().map(|k| format_group_key(*k)).collect();
        let tick_style = TextStyle::from(("sans-serif", 15).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        chart
            .draw_series(
                engine
                    .ticks(&labels)
                    .into_iter()
                    .map(|tick| Text::new(tick.label, (tick.x, y_floor * 0.3), tick_style.clone())),
            )
            .map_err(GraficarError::render)?;

        if !legend_at.is_empty() {
            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .background_style(&WHITE.mix(0.8))
                .draw()
                .map_err(GraficarError::render)?;
        }

        root.present().map_err(GraficarError::render)?;
        Ok(())
    }
}

/// Normalize every (group, metric) pair and position the resulting bars.
///
/// Walks groups ascending and metrics in column order, so draw order (and
/// therefore legend attach order) is deterministic. A category missing from
/// a group contributes nothing, leaving a gap in that cluster.
fn place_bars(
    dataset: &Dataset,
    group_keys: &[f64],
    metrics: &[String],
    categories: &[String],
    engine: &LayoutEngine,
) -> Result<Vec<PlacedBar>> {
    let mut bars = Vec::new();
    for (g, key) in group_keys.iter().enumerate() {
        let rows = dataset.rows_in_group(*key);
        let group_label = format_group_key(*key);
        for (m, metric_name) in metrics.iter().enumerate() {
            let percentages = baseline_percentages(&rows, m, &group_label, metric_name)?;
            for (category, percentage) in percentages {
                let Some(slot) = categories.iter().position(|c| *c == category) else {
                    continue;
                };
                let placed = engine.bar(g, m, slot);
                bars.push(PlacedBar {
                    x: placed.x,
                    width: placed.width,
                    percentage,
                    category,
                });
            }
        }
    }
    Ok(bars)
}

/// Indices of the bars that introduce a category, in draw order.
///
/// Exactly one index per distinct category in `bars`: the legend never
/// repeats an entry no matter how many groups or metrics a category spans.
fn legend_bar_indices(bars: &[PlacedBar]) -> Vec<usize> {
    let mut seen: HashSet<&str> = HashSet::new();
    bars.iter()
        .enumerate()
        .filter(|(_, bar)| seen.insert(bar.category.as_str()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Row;

    fn dataset(rows: Vec<Row>) -> Dataset {
        Dataset::from_rows(rows, vec!["Time".to_string()], "test.csv").unwrap()
    }

    fn row(category: &str, size: f64, time: f64) -> Row {
        Row {
            category: category.to_string(),
            size,
            times: vec![time],
        }
    }

    #[test]
    fn test_title_for_replaces_underscores() {
        assert_eq!(
            title_for(Path::new("/tmp/benchmark_results_deque.png")),
            "benchmark results deque"
        );
    }

    #[test]
    fn test_place_bars_skips_absent_category_without_error() {
        // "B" is missing from group 100; its slot stays empty there while
        // "C" keeps slot 2.
        let ds = dataset(vec![
            row("A", 10.0, 5.0),
            row("B", 10.0, 10.0),
            row("C", 10.0, 7.0),
            row("A", 100.0, 5.0),
            row("C", 100.0, 6.0),
        ]);
        let categories = ds.categories();
        let engine = LayoutEngine::single(categories.len(), 0.3);
        let bars = place_bars(&ds, &ds.group_keys(), ds.metric_columns(), &categories, &engine)
            .unwrap();

        assert_eq!(bars.len(), 5);
        let in_group_1: Vec<&PlacedBar> = bars.iter().filter(|b| b.x >= 1.0).collect();
        assert_eq!(in_group_1.len(), 2);
        // "C" keeps slot 2's x-position even though slot 1 is empty.
        let c_bar = in_group_1.iter().find(|b| b.category == "C").unwrap();
        assert!((c_bar.x - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_one_legend_entry_per_distinct_category() {
        // Both categories appear in both groups; each still gets exactly
        // one legend slot, taken at its first-drawn bar.
        let ds = dataset(vec![
            row("A", 10.0, 5.0),
            row("B", 10.0, 10.0),
            row("A", 100.0, 5.0),
            row("B", 100.0, 6.0),
        ]);
        let categories = ds.categories();
        let engine = LayoutEngine::single(categories.len(), 0.3);
        let bars = place_bars(&ds, &ds.group_keys(), ds.metric_columns(), &categories, &engine)
            .unwrap();

        assert_eq!(bars.len(), 4);
        let legend = legend_bar_indices(&bars);
        assert_eq!(legend.len(), categories.len());
        assert_eq!(legend, vec![0, 1]);
    }

    #[test]
    fn test_legend_skips_category_missing_from_first_group() {
        // "C" first appears in group 100; its legend entry attaches there.
        let ds = dataset(vec![
            row("A", 10.0, 5.0),
            row("A", 100.0, 5.0),
            row("C", 100.0, 6.0),
        ]);
        let categories = ds.categories();
        let engine = LayoutEngine::single(categories.len(), 0.3);
        let bars = place_bars(&ds, &ds.group_keys(), ds.metric_columns(), &categories, &engine)
            .unwrap();

        let legend = legend_bar_indices(&bars);
        assert_eq!(legend.len(), 2);
        assert_eq!(bars[legend[1]].category, "C");
    }

    #[test]
    fn test_place_bars_fails_fast_on_zero_baseline() {
        let ds = dataset(vec![row("A", 10.0, 0.0), row("B", 10.0, 2.0)]);
        let categories = ds.categories();
        let engine = LayoutEngine::single(categories.len(), 0.3);
        let err =
            place_bars(&ds, &ds.group_keys(), ds.metric_columns(), &categories, &engine)
                .unwrap_err();
        assert!(matches!(err, GraficarError::DegenerateBaseline { .. }));
    }
}
