pub mod chart;
pub mod columns;
pub mod hypothesis;
pub mod result;

pub use chart::{
    Bar, BarChart, ChartSpec, DensityChart, DensitySeries, PALETTE, PointChart, PointEstimate,
    Rgb,
};
pub use columns::{BINARY_COLUMNS, BINARY_MAP, bin_column};
pub use hypothesis::{Hypothesis, ParseHypothesisError, StatTest};
pub use result::{GroupSummary, HypothesisResult, SIGNIFICANCE_LEVEL, Significance};
