//! Graficar: grouped bar charts of baseline-relative benchmark timings.
//!
//! Given a benchmark table (one row per tested implementation at a given
//! input size, with one or more timing columns), graficar normalizes each
//! group's timings against the fastest implementation in that group and
//! renders the result as a grouped bar chart: the baseline sits at 100% and
//! every other bar shows how much slower it ran.
//!
//! Two cooperating pipelines:
//! - [`normalize`] turns raw timings into baseline-relative percentages per
//!   group (and per trial sub-group when the table carries several timing
//!   columns);
//! - [`layout`] + [`render`] place and draw the bars with deterministic
//!   category coloring and a de-duplicated legend.
//!
//! # Example
//!
//! ```no_run
//! use graficar::{ChartRenderer, Dataset, PlotConfig};
//! use std::path::Path;
//!
//! let dataset = Dataset::from_csv("benchmark_results_deque.csv").unwrap();
//! let config = PlotConfig::default();
//! ChartRenderer::new(&config)
//!     .render(&dataset, "benchmark results deque", Path::new("benchmark_results_deque.png"))
//!     .unwrap();
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod render;

pub use color::{BarColor, ColorMap};
pub use config::{Palette, PlotConfig};
pub use dataset::{Dataset, Row};
pub use error::{GraficarError, Result};
pub use layout::LayoutEngine;
pub use render::ChartRenderer;
