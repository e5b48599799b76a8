//! Input/output helpers.
//!
//! - raw text ingest + tokenization (`parse`)

pub mod parse;

pub use parse::*;
