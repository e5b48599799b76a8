//! Formatted terminal output for fit results.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::FitResult;

/// Format the fit report: four lines, fixed order.
///
/// Values use Rust's shortest-roundtrip float formatting, so the printed
/// numbers parse back to the exact computed values.
pub fn format_fit_report(fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("a = {} +- {}\n", fit.a, fit.da));
    out.push_str(&format!("b = {} +- {}\n", fit.b, fit.db));
    out.push_str(&format!("chi2 = {}\n", fit.chi2));
    out.push_str(&format!("chi2_reduced = {}\n", fit.chi2_reduced));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_four_lines_in_fixed_order() {
        let fit = FitResult {
            a: 2.0,
            b: -0.5,
            da: 0.25,
            db: 0.125,
            chi2: 1.5,
            chi2_reduced: 0.75,
        };

        let report = format_fit_report(&fit);
        let expected = concat!(
            "a = 2 +- 0.25\n",
            "b = -0.5 +- 0.125\n",
            "chi2 = 1.5\n",
            "chi2_reduced = 0.75\n",
        );
        assert_eq!(report, expected);
    }
}
