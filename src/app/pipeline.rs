//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read -> parse -> validate -> fit
//!
//! The CLI front-end (and tests) can then focus on presentation.

use crate::domain::{Dataset, FitConfig, FitResult};
use crate::error::AppError;

/// All computed outputs of a single `linfit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub fit: FitResult,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Read + tokenize the input file.
    let raw = crate::io::parse::load_input(&config.input_path)?;
    log::debug!(
        "parsed {} data rows ({:?}-oriented)",
        raw.rows.len(),
        raw.orientation
    );

    // 2) Validate into the typed dataset.
    let dataset = crate::validate::build_dataset(&raw)?;
    log::debug!("validated dataset with n={} points", dataset.len());

    // 3) Weighted linear fit.
    let fit = crate::fit::fit_linear(&dataset)?;

    Ok(RunOutput { dataset, fit })
}
