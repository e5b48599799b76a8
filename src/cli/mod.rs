//! Command-line parsing for the weighted linear fit tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parsing/validation/fit code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "linfit",
    version,
    about = "Weighted linear fit for (x, y, dx, dy) datasets"
)]
pub struct Cli {
    /// Input data file (row- or column-oriented, blank-line terminated,
    /// optionally followed by legend lines).
    pub input: PathBuf,

    /// Output path for the SVG plot.
    #[arg(long, default_value = "linear_fit.svg")]
    pub out: PathBuf,

    /// Skip writing the plot file (report only).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (pixels).
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Plot height (pixels).
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
