//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the parse → validate → fit pipeline
//! - prints the report
//! - writes the plot

use clap::Parser;

use crate::cli::Cli;
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `linfit` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    let config = fit_config_from_args(&cli);
    let run = pipeline::run_fit(&config)?;

    // Stdout carries exactly the four report lines; everything else goes to
    // the log (stderr).
    print!("{}", crate::report::format_fit_report(&run.fit));

    if config.plot {
        crate::plot::render_svg_plot(
            &run.dataset,
            &run.fit,
            &config.plot_path,
            (config.plot_width, config.plot_height),
        )?;
    }

    Ok(())
}

pub fn fit_config_from_args(cli: &Cli) -> FitConfig {
    FitConfig {
        input_path: cli.input.clone(),
        plot: !cli.no_plot,
        plot_path: cli.out.clone(),
        plot_width: cli.width,
        plot_height: cli.height,
    }
}
