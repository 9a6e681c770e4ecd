//! Chart files on disk.

use std::path::{Path, PathBuf};

use alz_model::{ChartSpec, Hypothesis};
use plotters::prelude::{IntoDrawingArea, SVGBackend, WHITE};

use crate::draw::{draw_bar_chart, draw_density_chart, draw_point_chart};
use crate::error::{ReportError, Result};

/// Pixel size of every chart (an 8×5 figure at 100 dpi).
pub const CHART_SIZE: (u32, u32) = (800, 500);

/// Renders one chart to an SVG file at `path`, creating parent directories.
///
/// Returns the path written.
pub fn render_chart(spec: &ChartSpec, path: &Path) -> Result<PathBuf> {
    if is_empty(spec) {
        return Err(ReportError::NoData {
            title: spec.title().to_string(),
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let draw_error = |err: &dyn std::fmt::Display| ReportError::Draw {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| draw_error(&e))?;
    let drawn = match spec {
        ChartSpec::Bar(chart) => draw_bar_chart(&root, chart),
        ChartSpec::Point(chart) => draw_point_chart(&root, chart),
        ChartSpec::Density(chart) => draw_density_chart(&root, chart),
    };
    drawn.map_err(|e| draw_error(&e))?;
    root.present().map_err(|e| draw_error(&e))?;

    tracing::debug!(path = %path.display(), title = spec.title(), "chart rendered");
    Ok(path.to_path_buf())
}

/// Renders each chart into `output_dir` under its hypothesis file name.
///
/// A chart that fails is logged and skipped; the charts that were written
/// are returned with their paths, in input order.
pub fn write_chart_outputs(
    output_dir: &Path,
    charts: &[(Hypothesis, &ChartSpec)],
) -> Vec<(Hypothesis, PathBuf)> {
    let mut outputs = Vec::with_capacity(charts.len());
    for (hypothesis, spec) in charts {
        let path = output_dir.join(hypothesis.chart_file_name());
        match render_chart(spec, &path) {
            Ok(path) => {
                tracing::info!(
                    hypothesis = hypothesis.code(),
                    path = %path.display(),
                    "Chart saved"
                );
                outputs.push((*hypothesis, path));
            }
            Err(error) => {
                tracing::warn!(hypothesis = hypothesis.code(), %error, "Chart not rendered");
            }
        }
    }
    outputs
}

fn is_empty(spec: &ChartSpec) -> bool {
    match spec {
        ChartSpec::Bar(chart) => chart.bars.is_empty(),
        ChartSpec::Point(chart) => chart.points.is_empty(),
        ChartSpec::Density(chart) => chart.series.iter().all(|s| s.points.is_empty()),
    }
}
