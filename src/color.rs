//! Deterministic category coloring.
//!
//! A chart run builds one [`ColorMap`] from the palette and the dataset's
//! categories in first-seen order. Once assigned, a category keeps its color
//! for the rest of the run, across every group and metric in the figure.

use crate::config::Palette;
use plotters::style::RGBColor;
use std::collections::HashMap;

/// Display color for a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Red,
    Green,
    Blue,
    Gray,
}

impl BarColor {
    /// Concrete RGB value for the plotting backend.
    pub fn rgb(self) -> RGBColor {
        match self {
            BarColor::Red => RGBColor(255, 0, 0),
            BarColor::Green => RGBColor(0, 128, 0),
            BarColor::Blue => RGBColor(0, 0, 255),
            BarColor::Gray => RGBColor(128, 128, 128),
        }
    }
}

/// Category name → color mapping for one chart run.
///
/// Assignment policy, in order:
/// 1. Well-known names take their fixed palette colors.
/// 2. The first category in dataset order that is not in the fixed set
///    takes the palette's third color.
/// 3. Everything else takes the fallback color.
///
/// Known limitation: step 2 depends on first-seen order, so two datasets
/// with the same category set but different row order can hand the third
/// color to different categories.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: HashMap<String, BarColor>,
    fallback: BarColor,
}

impl ColorMap {
    /// Build the mapping from a palette and the categories in first-seen
    /// dataset order.
    pub fn build(palette: &Palette, categories: &[String]) -> Self {
        let mut colors: HashMap<String, BarColor> = palette
            .fixed
            .iter()
            .map(|(name, color)| (name.clone(), *color))
            .collect();

        if let Some(first) = categories.iter().find(|c| !colors.contains_key(*c)) {
            colors.insert(first.clone(), palette.third);
        }

        Self {
            colors,
            fallback: palette.fallback,
        }
    }

    /// Color for a category; unknown names get the fallback color.
    pub fn color_for(&self, category: &str) -> BarColor {
        self.colors.get(category).copied().unwrap_or(self.fallback)
    }
}
