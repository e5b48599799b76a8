//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory during fitting
//! - constructed directly in tests without touching the filesystem

use std::path::PathBuf;

/// How the data block encodes the measurement table.
///
/// Both encodings describe the same dataset; they must produce identical
/// fit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each line names an axis (`x`, `y`, `dx`, `dy`) and carries its full
    /// value series.
    Rows,
    /// Each line is one point's `x y dx dy` reading, in that fixed order.
    Columns,
}

/// Tokenized data block plus legend metadata, prior to validation.
///
/// Tokens are lowercased but otherwise untouched: empty tokens from runs of
/// spaces are preserved because the validator treats them as shape errors.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub orientation: Orientation,
    /// One entry per non-blank data line, each split on single spaces.
    pub rows: Vec<Vec<String>>,
    pub legends: Legends,
}

/// Metadata scanned from legend lines (anywhere in the input).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legends {
    /// Display label from an `x axis: ...` line, case preserved.
    pub x_label: Option<String>,
    /// Display label from a `y axis: ...` line, case preserved.
    pub y_label: Option<String>,
    /// Auxiliary numeric sequence from a line whose first token is `a`.
    pub seed_a: Option<Vec<f64>>,
    /// Auxiliary numeric sequence from a line whose first token is `b`.
    pub seed_b: Option<Vec<f64>>,
}

/// Axis display labels attached to a validated dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisLabels {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl AxisLabels {
    /// Label for the x axis, falling back to a plain `x`.
    pub fn x_or_default(&self) -> &str {
        self.x.as_deref().unwrap_or("x")
    }

    /// Label for the y axis, falling back to a plain `y`.
    pub fn y_or_default(&self) -> &str {
        self.y.as_deref().unwrap_or("y")
    }
}

/// Auxiliary parameter sequences from the input's legend lines.
///
/// The fit does not consume these; they are carried so callers (and future
/// seeded fits) can inspect them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitSeeds {
    pub a: Option<Vec<f64>>,
    pub b: Option<Vec<f64>>,
}

/// A validated measurement table.
///
/// Invariants (enforced by `validate::build_dataset`):
///
/// - `x`, `y`, `dx`, `dy` all have identical length n ≥ 1
/// - every `dx` and `dy` value is strictly positive
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
    pub labels: AxisLabels,
    pub seeds: FitSeeds,
}

impl Dataset {
    /// Number of measurement points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Output of the weighted linear fit `y = a·x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// Slope.
    pub a: f64,
    /// Intercept.
    pub b: f64,
    /// Standard error of the slope.
    pub da: f64,
    /// Standard error of the intercept.
    pub db: f64,
    /// Chi-square goodness-of-fit statistic.
    pub chi2: f64,
    /// Chi-square per degree of freedom (n − 2).
    pub chi2_reduced: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input_path: PathBuf,
    pub plot: bool,
    pub plot_path: PathBuf,
    pub plot_width: u32,
    pub plot_height: u32,
}
