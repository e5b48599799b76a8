//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated measurement table (`Dataset`) and its metadata
//! - the raw parsed form it is built from (`RawTable`, `Orientation`)
//! - fit outputs (`FitResult`)
//! - run configuration (`FitConfig`)

pub mod types;

pub use types::*;
