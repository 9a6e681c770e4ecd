//! Chart rendering.
//!
//! Turns the backend-independent [`alz_model::ChartSpec`] values produced by
//! the hypothesis runners into SVG files with plotters:
//!
//! - bar charts (diagnosis rate per smoking category)
//! - point charts (group means with 95% interval whiskers)
//! - density charts (filled kernel density curves)

mod draw;
mod error;
mod render;

pub use error::{ReportError, Result};
pub use render::{CHART_SIZE, render_chart, write_chart_outputs};
