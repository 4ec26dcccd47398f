//! Bar and tick positioning for grouped charts.
//!
//! The layout engine turns (group, metric, slot) indices into x-axis
//! positions. A category's slot index comes from its position in the
//! canonical category list for the whole chart, never from per-group
//! presence, so a category absent from one group does not shift the bars
//! of the categories around it.

/// Horizontal placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

/// One axis tick: position plus the group-key label drawn under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// Position calculator for one chart.
///
/// Two modes mirror the two chart variants:
/// - `Single`: one timing column; bars of a group sit contiguously at
///   `group_index + slot * bar_width`, ticks at the group index.
/// - `Trials`: several timing columns per group; each metric forms its own
///   sub-group of category bars, with spacing between bars and a full
///   stride between sub-groups. Ticks land once per group, centered on the
///   group's first sub-group.
#[derive(Debug, Clone)]
pub enum LayoutEngine {
    Single {
        categories: usize,
        bar_width: f64,
    },
    Trials {
        metrics: usize,
        categories: usize,
        bar_width: f64,
        spacing: f64,
    },
}

impl LayoutEngine {
    /// Single-metric layout for `categories` canonical category slots.
    pub fn single(categories: usize, bar_width: f64) -> Self {
        Self::Single {
            categories,
            bar_width,
        }
    }

    /// Multi-metric layout: `metrics` sub-groups per group.
    pub fn trials(metrics: usize, categories: usize, bar_width: f64, spacing: f64) -> Self {
        Self::Trials {
            metrics,
            categories,
            bar_width,
            spacing,
        }
    }

    /// X position and width for the bar at (group, metric, slot).
    ///
    /// `metric` is ignored in single mode, which has one implicit metric.
    pub fn bar(&self, group: usize, metric: usize, slot: usize) -> BarSlot {
        match self {
            Self::Single { bar_width, .. } => BarSlot {
                x: group as f64 + slot as f64 * bar_width,
                width: *bar_width,
            },
            Self::Trials {
                metrics,
                bar_width,
                spacing,
                ..
            } => {
                let base = ((group * metrics + metric) as f64) * self.trial_stride();
                BarSlot {
                    x: base + slot as f64 * (bar_width + spacing),
                    width: *bar_width,
                }
            }
        }
    }

    /// One tick per group, labeled with the group key.
    pub fn ticks(&self, group_labels: &[String]) -> Vec<Tick> {
        group_labels
            .iter()
            .enumerate()
            .map(|(g, label)| Tick {
                x: self.tick_x(g),
                label: label.clone(),
            })
            .collect()
    }

    /// Axis range covering every bar, with a half-slot margin on each side.
    pub fn x_extent(&self, groups: usize) -> (f64, f64) {
        if groups == 0 {
            return (-0.5, 0.5);
        }
        let last = match self {
            Self::Single {
                categories,
                bar_width,
            } => (groups - 1) as f64 + *categories as f64 * bar_width,
            Self::Trials {
                metrics,
                categories,
                bar_width,
                spacing,
            } => {
                let last_base = ((groups * metrics - 1) as f64) * self.trial_stride();
                last_base + (*categories as f64 - 1.0) * (bar_width + spacing) + bar_width
            }
        };
        (-0.5, last + 0.5)
    }

    fn tick_x(&self, group: usize) -> f64 {
        match self {
            Self::Single { .. } => group as f64,
            Self::Trials {
                metrics,
                categories,
                bar_width,
                ..
            } => {
                // Centered under the group's first sub-group.
                ((group * metrics) as f64) * self.trial_stride()
                    + *categories as f64 * bar_width / 2.0
            }
        }
    }

    /// Distance between consecutive sub-group bases in trial mode.
    fn trial_stride(&self) -> f64 {
        match self {
            Self::Single { .. } => 0.0,
            Self::Trials {
                categories,
                bar_width,
                spacing,
                ..
            } => *categories as f64 * (bar_width + spacing) + spacing,
        }
    }
}
