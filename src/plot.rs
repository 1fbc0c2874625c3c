//! Line charts of sweep results.

use crate::{Error, ImageFormat, PlotConfig, Result, SweepResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::PathBuf;
use tracing::info;

/// Renders `result` as a line chart under `config.out_dir` and returns the
/// written file.
pub fn render(result: &SweepResult, config: &PlotConfig) -> Result<PathBuf> {
    fs::create_dir_all(&config.out_dir)?;
    let path = config.output_path(result.file_stem());
    let size = (config.width, config.height);

    match config.format {
        ImageFormat::Png => draw(BitMapBackend::new(&path, size).into_drawing_area(), result).map_err(plot_error)?,
        ImageFormat::Svg => draw(SVGBackend::new(&path, size).into_drawing_area(), result).map_err(plot_error)?,
    }

    info!(chart = result.title(), path = %path.display(), "saved chart");
    Ok(path)
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    result: &SweepResult,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let (x_range, y_range) = bounds(result.points());

    let mut chart = ChartBuilder::on(&root)
        .caption(result.title(), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    // the mesh draws the grid lines along with the axes
    chart
        .configure_mesh()
        .x_desc(result.x_label())
        .y_desc(result.y_label())
        .draw()?;

    chart
        .draw_series(LineSeries::new(result.points().iter().copied(), &BLUE))?
        .label(result.legend())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Plot(err.to_string())
}

// x spans the swept values, y runs from 0 to 10% above the highest rate.
fn bounds(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let (x_lo, x_hi) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if last.0 > first.0 => (first.0, last.0),
        (Some(first), _) => (first.0, first.0 + 1.0),
        _ => (0.0, 1.0),
    };
    let mut y_max = points.iter().map(|p| p.1).fold(0.0f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    (x_lo..x_hi, 0.0..y_max * 1.1)
}
