//! Dataset validation.
//!
//! Turns a tokenized `RawTable` into a typed `Dataset`, or fails with a
//! diagnostic. All structural and physical checks happen here, before any
//! fit arithmetic runs.
//!
//! Responsibilities:
//!
//! - **Shape**: 4-token lines in column mode; exactly 4 axis lines of equal
//!   length in row mode
//! - **Tokens**: every data token parses as `f64`
//! - **Physics**: uncertainties (`dx`, `dy`) are strictly positive

use crate::domain::{AxisLabels, Dataset, FitSeeds, Orientation, RawTable};
use crate::error::AppError;

const LENGTH_MISMATCH: &str = "Data lists are not the same length";
const NON_POSITIVE_UNCERTAINTY: &str = "Not all uncertainties are positive";

/// Validate a raw table and build the typed dataset.
pub fn build_dataset(raw: &RawTable) -> Result<Dataset, AppError> {
    let (x, y, dx, dy) = match raw.orientation {
        Orientation::Columns => collect_columns(&raw.rows)?,
        Orientation::Rows => collect_rows(&raw.rows)?,
    };

    // Uncertainties are standard deviations; zero or negative values make
    // the fit weights undefined. NaN fails this check too (it is not > 0).
    if !dx.iter().chain(dy.iter()).all(|v| *v > 0.0) {
        return Err(AppError::constraint(NON_POSITIVE_UNCERTAINTY));
    }

    Ok(Dataset {
        x,
        y,
        dx,
        dy,
        labels: AxisLabels {
            x: raw.legends.x_label.clone(),
            y: raw.legends.y_label.clone(),
        },
        seeds: FitSeeds {
            a: raw.legends.seed_a.clone(),
            b: raw.legends.seed_b.clone(),
        },
    })
}

type Series = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

/// Column mode: every line is one point's `x y dx dy` reading.
fn collect_columns(rows: &[Vec<String>]) -> Result<Series, AppError> {
    let n = rows.len();
    let (mut x, mut y) = (Vec::with_capacity(n), Vec::with_capacity(n));
    let (mut dx, mut dy) = (Vec::with_capacity(n), Vec::with_capacity(n));

    for row in rows {
        if row.len() != 4 || row.iter().any(|t| t.is_empty()) {
            return Err(AppError::structural(LENGTH_MISMATCH));
        }
        x.push(parse_value(&row[0])?);
        y.push(parse_value(&row[1])?);
        dx.push(parse_value(&row[2])?);
        dy.push(parse_value(&row[3])?);
    }

    Ok((x, y, dx, dy))
}

/// Row mode: each line names an axis and carries its full series.
fn collect_rows(rows: &[Vec<String>]) -> Result<Series, AppError> {
    if rows.len() != 4 {
        return Err(AppError::structural(LENGTH_MISMATCH));
    }

    let mut x = None;
    let mut y = None;
    let mut dx = None;
    let mut dy = None;
    let mut expected_len: Option<usize> = None;

    for row in rows {
        let name = row[0].as_str();

        // Blank tokens (from doubled spaces) are excluded before the length
        // comparison and the value parse.
        let tokens: Vec<&str> = row[1..]
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();

        match expected_len {
            None => expected_len = Some(tokens.len()),
            Some(len) if tokens.len() != len => {
                return Err(AppError::structural(LENGTH_MISMATCH));
            }
            Some(_) => {}
        }

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            values.push(parse_value(token)?);
        }

        let slot = match name {
            "x" => &mut x,
            "y" => &mut y,
            "dx" => &mut dx,
            "dy" => &mut dy,
            other => {
                return Err(AppError::structural(format!(
                    "Unknown axis row '{other}' (expected x, y, dx, dy)"
                )));
            }
        };
        if slot.is_some() {
            return Err(AppError::structural(format!("Duplicate axis row '{name}'")));
        }
        *slot = Some(values);
    }

    let (Some(x), Some(y), Some(dx), Some(dy)) = (x, y, dx, dy) else {
        return Err(AppError::structural(
            "Missing axis row (expected x, y, dx, dy)",
        ));
    };

    Ok((x, y, dx, dy))
}

fn parse_value(token: &str) -> Result<f64, AppError> {
    token
        .parse::<f64>()
        .map_err(|_| AppError::structural(format!("Invalid numeric value '{token}' in data block")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::parse_lines;

    fn dataset(lines: &[&str]) -> Result<Dataset, AppError> {
        build_dataset(&parse_lines(lines)?)
    }

    #[test]
    fn row_and_column_encodings_agree() {
        let rows = dataset(&[
            "x 1 2 3",
            "dx 0.5 0.5 0.5",
            "y 2 4 6",
            "dy 0.1 0.1 0.1",
        ])
        .unwrap();
        let columns = dataset(&[
            "1 2 0.5 0.1",
            "2 4 0.5 0.1",
            "3 6 0.5 0.1",
        ])
        .unwrap();

        assert_eq!(rows.x, columns.x);
        assert_eq!(rows.y, columns.y);
        assert_eq!(rows.dx, columns.dx);
        assert_eq!(rows.dy, columns.dy);
    }

    #[test]
    fn column_row_with_wrong_token_count_fails() {
        let err = dataset(&["1 2 0.5 0.1", "2 4 0.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "Data lists are not the same length");
    }

    #[test]
    fn column_row_with_empty_token_fails() {
        // Doubled space yields an empty token: 4 tokens, one blank.
        let err = dataset(&["1 2 0.5 0.1", "2 4  0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "Data lists are not the same length");
    }

    #[test]
    fn row_mode_requires_exactly_four_lines() {
        let err = dataset(&["x 1 2", "y 2 4", "dy 0.1 0.1"]).unwrap_err();
        assert_eq!(err.to_string(), "Data lists are not the same length");

        let err = dataset(&[
            "x 1 2",
            "y 2 4",
            "dx 0.5 0.5",
            "dy 0.1 0.1",
            "dy 0.1 0.1",
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "Data lists are not the same length");
    }

    #[test]
    fn row_length_mismatch_fails() {
        let err = dataset(&["x 1 2 3", "y 2 4", "dx 0.5 0.5 0.5", "dy 0.1 0.1 0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "Data lists are not the same length");
    }

    #[test]
    fn row_blank_tokens_are_excluded_from_length_check() {
        // "x" carries a doubled space; after dropping the blank token the
        // series still has 3 values.
        let data = dataset(&[
            "x 1  2 3",
            "y 2 4 6",
            "dx 0.5 0.5 0.5",
            "dy 0.1 0.1 0.1",
        ])
        .unwrap();
        assert_eq!(data.x, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn unknown_axis_row_fails() {
        let err = dataset(&["x 1 2", "y 2 4", "zz 0.5 0.5", "dy 0.1 0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(err.to_string().contains("Unknown axis row 'zz'"));
    }

    #[test]
    fn duplicate_axis_row_fails() {
        let err = dataset(&["x 1 2", "x 2 4", "dx 0.5 0.5", "dy 0.1 0.1"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate axis row 'x'"));
    }

    #[test]
    fn non_numeric_data_token_fails() {
        let err = dataset(&["1 2 0.5 0.1", "2 oops 0.5 0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(err.to_string().contains("'oops'"));
    }

    #[test]
    fn zero_dy_is_a_constraint_error() {
        let err = dataset(&["1 2 0.5 0.1", "2 4 0.5 0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert_eq!(err.to_string(), "Not all uncertainties are positive");
    }

    #[test]
    fn negative_dx_is_a_constraint_error() {
        let err = dataset(&[
            "x 1 2",
            "y 2 4",
            "dx -0.5 0.5",
            "dy 0.1 0.1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert_eq!(err.to_string(), "Not all uncertainties are positive");
    }

    #[test]
    fn legends_are_carried_onto_the_dataset() {
        let data = dataset(&[
            "1 2 0.5 0.1",
            "2 4 0.5 0.1",
            "",
            "x axis: Time [sec]",
            "y axis: Distance [cm]",
            "a 1.0 2.0",
        ])
        .unwrap();
        assert_eq!(data.labels.x.as_deref(), Some("Time [sec]"));
        assert_eq!(data.labels.y.as_deref(), Some("Distance [cm]"));
        assert_eq!(data.seeds.a, Some(vec![1.0, 2.0]));
        assert_eq!(data.seeds.b, None);
    }
}
