//! Plot rendering for the fitted line and error-barred data points.

pub mod svg;

pub use svg::*;
