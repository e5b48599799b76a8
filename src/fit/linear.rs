//! Weighted least-squares straight-line fit.
//!
//! Model: `y = a·x + b`, with each point weighted by the inverse square of
//! its y-uncertainty (`w_i = 1/dy_i²`).
//!
//! Every derived quantity is built from one primitive, the weighted average
//!
//! ```text
//! avg(q) = Σ q_i/dy_i² / Σ 1/dy_i²
//! ```
//!
//! including `avg(dy²)`, which deliberately keeps the same weighting (it
//! reduces to `n / Σ(1/dy_i²)`, not the arithmetic mean of `dy²`). The
//! closed-form estimates are:
//!
//! ```text
//! a  = (avg(xy) − avg(x)·avg(y)) / (avg(x²) − avg(x)²)
//! b  = avg(y) − a·avg(x)
//! da = sqrt(avg(dy²) / (n · (avg(x²) − avg(x)²)))
//! db = sqrt(avg(dy²) · avg(x²) / (n · (avg(x²) − avg(x)²)))
//! ```

use crate::domain::{Dataset, FitResult};
use crate::error::AppError;

/// Relative floor for the weighted x-variance denominator.
///
/// `avg(x²) − avg(x)²` is mathematically ≥ 0; catastrophic cancellation can
/// leave a tiny positive or negative residue when all x are (nearly) equal,
/// so the guard is relative to the magnitude of `avg(x²)`.
const VARIANCE_FLOOR: f64 = 1e-12;

/// Fit `y = a·x + b` over a validated dataset.
///
/// Fails with a numerical-degeneracy error when fewer than 3 points are
/// given (no degrees of freedom for the reduced chi-square) or when the
/// x-values carry no weighted variance (the slope denominator vanishes).
pub fn fit_linear(data: &Dataset) -> Result<FitResult, AppError> {
    let n = data.len();
    if n <= 2 {
        return Err(AppError::numerical(format!(
            "Not enough points for a linear fit: got {n}, need at least 3 \
             (chi2_reduced divides by n - 2)"
        )));
    }

    let dy_sq: Vec<f64> = data.dy.iter().map(|d| d * d).collect();
    let xy: Vec<f64> = data.x.iter().zip(&data.y).map(|(x, y)| x * y).collect();
    let x_sq: Vec<f64> = data.x.iter().map(|x| x * x).collect();

    let x_avg = weighted_avg(&data.x, &dy_sq);
    let y_avg = weighted_avg(&data.y, &dy_sq);
    let xy_avg = weighted_avg(&xy, &dy_sq);
    let x_sq_avg = weighted_avg(&x_sq, &dy_sq);
    let dy_sq_avg = weighted_avg(&dy_sq, &dy_sq);

    let denom = x_sq_avg - x_avg * x_avg;
    if !denom.is_finite() || denom <= VARIANCE_FLOOR * x_sq_avg.abs().max(1.0) {
        return Err(AppError::numerical(
            "x values have no weighted variance; the fit slope is undefined",
        ));
    }

    let a = (xy_avg - x_avg * y_avg) / denom;
    let b = y_avg - a * x_avg;
    let da = (dy_sq_avg / (n as f64 * denom)).sqrt();
    let db = (dy_sq_avg * x_sq_avg / (n as f64 * denom)).sqrt();

    let mut chi2 = 0.0;
    for i in 0..n {
        let residual = (data.y[i] - a * data.x[i] - b) / data.dy[i];
        chi2 += residual * residual;
    }
    let chi2_reduced = chi2 / (n as f64 - 2.0);

    Ok(FitResult {
        a,
        b,
        da,
        db,
        chi2,
        chi2_reduced,
    })
}

/// Weighted average of a per-point quantity, weights `1/dy_i²`.
pub fn weighted_avg(values: &[f64], dy_squared: &[f64]) -> f64 {
    let mut sum_top = 0.0;
    let mut sum_bottom = 0.0;
    for (value, dy_sq) in values.iter().zip(dy_squared) {
        sum_top += value / dy_sq;
        sum_bottom += 1.0 / dy_sq;
    }
    sum_top / sum_bottom
}
