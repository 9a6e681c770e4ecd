//! Library side of the `alz-analysis` binary: logging setup, the pipeline,
//! run results and their summary tables.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use pipeline::{analyze, run_analysis};
pub use types::{
    AnalysisConfig, DEFAULT_CHART_DIR, DEFAULT_DATA_PATH, HypothesisReport, HypothesisStatus,
    RunResult,
};
