//! Scatter-plus-regression plot rendering.
//!
//! Renders one PNG containing a grid of scatter plots (one cell per group)
//! with the fitted least-squares line and an R² annotation overlaid. Uses
//! the [`plotters`] bitmap backend with built-in fonts so rendering works
//! in headless environments.

use std::path::Path;

use anyhow::{anyhow, bail};
use plotters::prelude::*;
use quartet_analysis::{analyzer::GroupAnalysis, dataset::Dataset};

const PLOT_SIZE: (u32, u32) = (1200, 900);
const LINE_SAMPLES: i32 = 100;

/// Renders the per-group scatter plots with fitted lines to `output_path`.
///
/// Cells are laid out in a two-column grid in ascending group order (the
/// classic 2×2 arrangement for the four-group quartet).
///
/// # Errors
///
/// Fails when a group in `analyses` has no observations in `dataset`, or
/// when the backend cannot draw or save the image.
pub(crate) fn render_quartet(
    dataset: &Dataset,
    analyses: &[GroupAnalysis],
    output_path: &Path,
) -> anyhow::Result<()> {
    if analyses.is_empty() {
        bail!("No groups to plot");
    }

    let series = dataset.group_series();

    let root = BitMapBackend::new(output_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill drawing area: {e}"))?;

    let cols = analyses.len().min(2);
    let rows = analyses.len().div_ceil(2);
    let cells = root.split_evenly((rows, cols));

    for (analysis, cell) in analyses.iter().zip(&cells) {
        let (xs, ys) = series
            .get(&analysis.group)
            .ok_or_else(|| anyhow!("No observations for group {}", analysis.group))?;
        draw_group_cell(cell, analysis, xs, ys)?;
    }

    root.present()
        .map_err(|e| anyhow!("Failed to save plot to {}: {e}", output_path.display()))?;
    Ok(())
}

fn draw_group_cell(
    cell: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    analysis: &GroupAnalysis,
    xs: &[f64],
    ys: &[f64],
) -> anyhow::Result<()> {
    let group = analysis.group;
    let (x_range, y_range) = padded_ranges(xs, ys);
    let (x_min, x_max) = (x_range.start, x_range.end);

    let mut chart = ChartBuilder::on(cell)
        .caption(format!("Group {group}"), ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("Failed to configure chart for group {group}: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("X")
        .y_desc("Y")
        .label_style(("sans-serif", 15))
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh for group {group}: {e}"))?;

    chart
        .draw_series(
            xs.iter()
                .zip(ys)
                .map(|(x, y)| Circle::new((*x, *y), 4, BLUE.filled())),
        )
        .map_err(|e| anyhow!("Failed to draw scatter for group {group}: {e}"))?;

    let fit = &analysis.fit;
    let step = (x_max - x_min) / f64::from(LINE_SAMPLES);
    chart
        .draw_series(LineSeries::new(
            (0..=LINE_SAMPLES).map(|i| {
                let x = x_min + step * f64::from(i);
                (x, fit.predict(x))
            }),
            RED.stroke_width(2),
        ))
        .map_err(|e| anyhow!("Failed to draw fitted line for group {group}: {e}"))?;

    drop(chart);
    let label = format!("R² = {:.3}", fit.r_squared);
    cell.draw(&Text::new(label, (60, 45), ("sans-serif", 22).into_font()))
        .map_err(|e| anyhow!("Failed to annotate group {group}: {e}"))?;

    Ok(())
}

/// Axis ranges padded by 5% of the data span so points never sit on the
/// plot border. A zero span falls back to a unit pad.
fn padded_ranges(xs: &[f64], ys: &[f64]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    (padded_range(xs), padded_range(ys))
}

fn padded_range(values: &[f64]) -> std::ops::Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_analysis::analyzer;

    #[test]
    fn test_padded_range_spans_data() {
        let range = padded_range(&[4.0, 14.0]);
        assert!(range.start < 4.0);
        assert!(range.end > 14.0);
        assert!((range.start - 3.5).abs() < 1e-12);
        assert!((range.end - 14.5).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_constant_values() {
        let range = padded_range(&[7.0, 7.0]);
        assert_eq!(range.start, 6.0);
        assert_eq!(range.end, 8.0);
    }

    #[test]
    fn test_empty_analyses_is_an_error() {
        let dataset = Dataset::default();
        let result = render_quartet(&dataset, &[], Path::new("unused.png"));
        assert!(result.is_err());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_reference_quartet() {
        let csv = include_str!("../../../data/anscombe.csv");
        let dataset = Dataset::parse_csv(csv).unwrap();
        let analyses = analyzer::analyze_all(&dataset).unwrap();
        let path = std::env::temp_dir().join("quartet_render_test.png");
        let _ = std::fs::remove_file(&path);

        render_quartet(&dataset, &analyses, &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
