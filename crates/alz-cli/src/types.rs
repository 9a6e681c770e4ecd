use std::path::PathBuf;

use alz_model::{Hypothesis, HypothesisResult};
use serde::Serialize;

/// Dataset read when no `--data` is given.
pub const DEFAULT_DATA_PATH: &str = "data/alzheimers_disease_data.csv";

/// Directory charts are written to when no `--chart-dir` is given.
pub const DEFAULT_CHART_DIR: &str = "charts";

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_path: PathBuf,
    pub chart_dir: PathBuf,
    pub render_charts: bool,
    /// Hypotheses to run; empty means all of them.
    pub hypotheses: Vec<Hypothesis>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            render_charts: true,
            hypotheses: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Selected hypotheses in pipeline order, without duplicates.
    pub fn selected(&self) -> Vec<Hypothesis> {
        Hypothesis::ALL
            .into_iter()
            .filter(|h| self.hypotheses.is_empty() || self.hypotheses.contains(h))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub data_path: PathBuf,
    pub rows_loaded: usize,
    pub rows_analyzed: usize,
    pub rows_dropped: usize,
    pub hypotheses: Vec<HypothesisReport>,
    pub has_errors: bool,
}

impl RunResult {
    pub fn failures(&self) -> impl Iterator<Item = (Hypothesis, &str)> {
        self.hypotheses.iter().filter_map(|report| match &report.status {
            HypothesisStatus::Failed { error } => Some((report.hypothesis, error.as_str())),
            HypothesisStatus::Completed { .. } => None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HypothesisReport {
    pub hypothesis: Hypothesis,
    #[serde(flatten)]
    pub status: HypothesisStatus,
    pub chart: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HypothesisStatus {
    Completed { result: HypothesisResult },
    Failed { error: String },
}
