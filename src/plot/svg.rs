//! Plotters-powered SVG chart of the data and the fitted line.
//!
//! Plot elements:
//! - fitted line: red, spanning exactly [min(x), max(x)] through `(a, b)`
//! - data points: blue horizontal/vertical error bars (`dx`, `dy`), no
//!   connecting line and no marker
//! - axis descriptions from the parsed legend labels (with plain `x`/`y`
//!   fallbacks)
//!
//! The chart is data-driven: bounds are computed from the error-bar extents
//! before any drawing happens, so the render call stays focused on drawing.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::{Dataset, FitResult};
use crate::error::AppError;

/// Render the data + fit chart to an SVG file.
pub fn render_svg_plot(
    data: &Dataset,
    fit: &FitResult,
    path: &Path,
    size: (u32, u32),
) -> Result<(), AppError> {
    let bounds = Bounds::of(data, fit)?;
    draw(data, fit, &bounds, path, size)
        .map_err(|e| AppError::io(format!("Failed to render plot '{}': {e}", path.display())))?;
    log::info!("wrote plot to {}", path.display());
    Ok(())
}

/// Padded chart bounds covering every error bar and the fitted line.
struct Bounds {
    x: [f64; 2],
    y: [f64; 2],
    /// Unpadded x extent of the data; the fitted line spans exactly this.
    x_data: [f64; 2],
}

impl Bounds {
    fn of(data: &Dataset, fit: &FitResult) -> Result<Self, AppError> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut x_data_min = f64::INFINITY;
        let mut x_data_max = f64::NEG_INFINITY;

        for i in 0..data.len() {
            x_data_min = x_data_min.min(data.x[i]);
            x_data_max = x_data_max.max(data.x[i]);
            x_min = x_min.min(data.x[i] - data.dx[i]);
            x_max = x_max.max(data.x[i] + data.dx[i]);
            y_min = y_min.min(data.y[i] - data.dy[i]);
            y_max = y_max.max(data.y[i] + data.dy[i]);
        }

        // The line endpoints can stick out past the error bars on steep fits.
        for x in [x_data_min, x_data_max] {
            let y = fit.a * x + fit.b;
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let (x0, x1) = pad_range(x_min, x_max, 0.05);
        let (y0, y1) = pad_range(y_min, y_max, 0.05);

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) {
            return Err(AppError::numerical(
                "Cannot plot: data bounds are not finite",
            ));
        }

        Ok(Self {
            x: [x0, x1],
            y: [y0, y1],
            x_data: [x_data_min, x_data_max],
        })
    }
}

fn draw(
    data: &Dataset,
    fit: &FitResult,
    bounds: &Bounds,
    path: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(bounds.x[0]..bounds.x[1], bounds.y[0]..bounds.y[1])?;

    chart
        .configure_mesh()
        .x_desc(data.labels.x_or_default())
        .y_desc(data.labels.y_or_default())
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    // 1) Fitted line across the x extent of the data.
    let [x0, x1] = bounds.x_data;
    chart.draw_series(LineSeries::new(
        [(x0, fit.a * x0 + fit.b), (x1, fit.a * x1 + fit.b)],
        &RED,
    ))?;

    // 2) Error bars, one vertical and one horizontal segment per point.
    chart.draw_series((0..data.len()).map(|i| {
        let (x, y) = (data.x[i], data.y[i]);
        PathElement::new(vec![(x, y - data.dy[i]), (x, y + data.dy[i])], BLUE)
    }))?;
    chart.draw_series((0..data.len()).map(|i| {
        let (x, y) = (data.x[i], data.y[i]);
        PathElement::new(vec![(x - data.dx[i], y), (x + data.dx[i], y)], BLUE)
    }))?;

    root.present()?;
    Ok(())
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AxisLabels, FitSeeds};

    fn sample_dataset() -> Dataset {
        Dataset {
            x: vec![1.0, 2.0, 3.0],
            y: vec![2.0, 4.0, 6.0],
            dx: vec![0.5, 0.5, 0.5],
            dy: vec![0.1, 0.1, 0.1],
            labels: AxisLabels::default(),
            seeds: FitSeeds::default(),
        }
    }

    #[test]
    fn bounds_cover_error_bars_with_padding() {
        let data = sample_dataset();
        let fit = crate::fit::fit_linear(&data).unwrap();
        let bounds = Bounds::of(&data, &fit).unwrap();

        // x extent of bars is [0.5, 3.5]; y extent is [1.9, 6.1].
        assert!(bounds.x[0] < 0.5 && bounds.x[1] > 3.5);
        assert!(bounds.y[0] < 1.9 && bounds.y[1] > 6.1);
        assert_eq!(bounds.x_data, [1.0, 3.0]);
    }

    #[test]
    fn renders_svg_file_with_labels() {
        let mut data = sample_dataset();
        data.labels.x = Some("Time [sec]".to_string());
        let fit = crate::fit::fit_linear(&data).unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join("linfit_plot_test.svg");
        render_svg_plot(&data, &fit, &path, (640, 480)).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Time [sec]"));
        std::fs::remove_file(&path).ok();
    }
}
