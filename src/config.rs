//! Plot configuration.
//!
//! The original tooling this replaces kept its category colors and file
//! lists in module-level constants; here everything the pipeline needs is
//! an explicit value passed in at construction time.

use crate::color::BarColor;

/// Category color policy for one chart run.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Well-known category names with hard-coded colors.
    pub fixed: Vec<(String, BarColor)>,
    /// Color for the first category outside the fixed set, in dataset order.
    pub third: BarColor,
    /// Color for every remaining category.
    pub fallback: BarColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fixed: vec![
                ("ShiftToMiddleArray".to_string(), BarColor::Red),
                ("ExpandingRingBuffer".to_string(), BarColor::Green),
            ],
            third: BarColor::Blue,
            fallback: BarColor::Gray,
        }
    }
}

/// Geometry and color settings for the chart pipeline.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub palette: Palette,
    /// Bar width in single-metric mode.
    pub single_bar_width: f64,
    /// Bar width in multi-metric (trial) mode.
    pub trial_bar_width: f64,
    /// Horizontal spacing between bars in trial mode.
    pub trial_spacing: f64,
    /// Figure size in pixels for single-metric charts.
    pub single_figure: (u32, u32),
    /// Figure size in pixels for trial charts.
    pub trial_figure: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            single_bar_width: 0.3,
            trial_bar_width: 0.4,
            trial_spacing: 0.3,
            single_figure: (1000, 600),
            trial_figure: (1400, 800),
        }
    }
}

impl PlotConfig {
    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
