//! Text ingest and tokenization.
//!
//! This module turns the raw lines of an input file into a `RawTable`:
//! the tokenized data block, its detected orientation, and any legend
//! metadata found in the file.
//!
//! Design goals:
//! - **No arithmetic here**: numeric validation of the data block belongs to
//!   `validate`, so shape errors surface before any parsing of values.
//! - **Deterministic behavior**: tokenization is a plain split on single
//!   spaces; empty tokens are preserved for the validator to reject.
//! - **Forgiving legends**: legend lines are optional metadata, so a
//!   malformed legend is logged and skipped rather than failing the run.

use std::path::Path;

use crate::domain::{Legends, Orientation, RawTable};
use crate::error::AppError;

/// Read an input file and parse it into a `RawTable`.
pub fn load_input(path: &Path) -> Result<RawTable, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read input '{}': {e}", path.display())))?;
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines)
}

/// Parse input lines into a tokenized data block plus legend metadata.
///
/// The data block is the leading run of non-blank lines; a blank line or the
/// end of the input terminates it. Legend lines are scanned over the whole
/// input, including the data block itself.
pub fn parse_lines(lines: &[&str]) -> Result<RawTable, AppError> {
    let rows = tokenize_data_block(lines);

    // Orientation detection needs a second line to inspect. A single data
    // line cannot be a row-oriented table (4 axis lines required) and is too
    // ambiguous to accept as a one-point column table.
    if rows.len() < 2 {
        return Err(AppError::structural("Data lists are not the same length"));
    }

    let orientation = detect_orientation(&rows[1]);
    let legends = scan_legends(lines);

    Ok(RawTable {
        orientation,
        rows,
        legends,
    })
}

/// Split the leading non-blank lines on single spaces and lowercase tokens.
///
/// Empty tokens (from runs of spaces or trailing spaces) are preserved: the
/// validator treats them as shape errors.
fn tokenize_data_block(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .take_while(|line| !line.is_empty())
        .map(|line| line.split(' ').map(str::to_lowercase).collect())
        .collect()
}

/// A table is column-oriented iff the second data line carries no axis-name
/// token anywhere.
fn detect_orientation(second_row: &[String]) -> Orientation {
    let has_axis_token = second_row
        .iter()
        .any(|t| matches!(t.as_str(), "x" | "y" | "dx" | "dy"));
    if has_axis_token {
        Orientation::Rows
    } else {
        Orientation::Columns
    }
}

/// Scan all lines for legend metadata.
///
/// Two legend forms are recognized:
/// - `<key>: <label>` where the line contains the substring `axis`; keys
///   `x axis` / `y axis` (case-insensitive) set the display labels, with the
///   label's case preserved
/// - a line whose first token is exactly `a` or `b`, followed by
///   space-separated floats (auxiliary parameter sequences)
///
/// Later lines win when a key repeats.
fn scan_legends(lines: &[&str]) -> Legends {
    let mut legends = Legends::default();

    for line in lines {
        if line.contains("axis") {
            let Some((key, label)) = line.split_once(": ") else {
                log::warn!("ignoring malformed legend line (no ': ' separator): {line:?}");
                continue;
            };
            match key.trim().to_lowercase().as_str() {
                "x axis" => legends.x_label = Some(label.to_string()),
                "y axis" => legends.y_label = Some(label.to_string()),
                other => log::warn!("ignoring unrecognized legend key {other:?}"),
            }
            continue;
        }

        let mut tokens = line.split(' ');
        let first = tokens.next().unwrap_or("");
        if first == "a" || first == "b" {
            let Some(values) = parse_seed_values(tokens) else {
                log::warn!("ignoring legend line with non-numeric values: {line:?}");
                continue;
            };
            match first {
                "a" => legends.seed_a = Some(values),
                _ => legends.seed_b = Some(values),
            }
        }
    }

    legends
}

/// Parse the remaining tokens of an `a`/`b` legend line as floats.
///
/// Blank tokens are skipped; any unparseable token rejects the whole line.
fn parse_seed_values<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<Vec<f64>> {
    let mut values = Vec::new();
    for token in tokens.filter(|t| !t.is_empty()) {
        values.push(token.parse::<f64>().ok()?);
    }
    Some(values)
}
