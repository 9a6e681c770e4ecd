//! Analysis pipeline with explicit stages.
//!
//! 1. **Load**: read the dataset CSV
//! 2. **Normalize**: coerce the diagnosis and encode the binary columns
//! 3. **Analyze**: run each selected hypothesis on the normalized table
//! 4. **Charts**: render the chart of every hypothesis that completed
//!
//! A failing hypothesis is recorded and the remaining ones still run. Load
//! and normalization failures stop the pipeline.

use std::path::{Path, PathBuf};

use alz_analysis::{HypothesisOutcome, runner_for};
use alz_ingest::load_dataset;
use alz_model::{ChartSpec, Hypothesis};
use alz_normalization::normalize_with_summary;
use alz_report::write_chart_outputs;
use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{error, info, info_span, warn};

use crate::types::{AnalysisConfig, HypothesisReport, HypothesisStatus, RunResult};

pub fn run_analysis(config: &AnalysisConfig) -> Result<RunResult> {
    let span = info_span!("analysis", data = %config.data_path.display());
    let _guard = span.enter();
    info!("Starting Alzheimer's Analysis Pipeline");

    let raw = load_dataset(&config.data_path)
        .with_context(|| format!("load dataset {}", config.data_path.display()))?;
    let (clean, summary) = normalize_with_summary(&raw).context("normalize dataset")?;

    let outcomes = analyze(&clean, &config.selected());
    let mut reports: Vec<HypothesisReport> = outcomes
        .iter()
        .map(|(hypothesis, outcome)| HypothesisReport {
            hypothesis: *hypothesis,
            status: match outcome {
                Ok(outcome) => HypothesisStatus::Completed {
                    result: outcome.result.clone(),
                },
                Err(error) => HypothesisStatus::Failed {
                    error: error.to_string(),
                },
            },
            chart: None,
        })
        .collect();

    if config.render_charts {
        let charts: Vec<(Hypothesis, &ChartSpec)> = outcomes
            .iter()
            .filter_map(|(hypothesis, outcome)| {
                outcome.as_ref().ok().map(|o| (*hypothesis, &o.chart))
            })
            .collect();
        for (hypothesis, path) in write_charts(&config.chart_dir, &charts) {
            if let Some(report) = reports.iter_mut().find(|r| r.hypothesis == hypothesis) {
                report.chart = Some(path);
            }
        }
    }

    let result = RunResult {
        data_path: config.data_path.clone(),
        rows_loaded: summary.input_rows,
        rows_analyzed: summary.output_rows,
        rows_dropped: summary.dropped_rows,
        has_errors: reports
            .iter()
            .any(|r| matches!(r.status, HypothesisStatus::Failed { .. })),
        hypotheses: reports,
    };

    if result.has_errors {
        warn!(
            failed = result.failures().count(),
            "Analysis Pipeline finished with failed hypotheses."
        );
    } else {
        info!("Analysis Pipeline finished successfully.");
    }
    Ok(result)
}

/// Runs each hypothesis in turn; one failing does not stop the others.
pub fn analyze(
    df: &DataFrame,
    hypotheses: &[Hypothesis],
) -> Vec<(Hypothesis, alz_analysis::Result<HypothesisOutcome>)> {
    hypotheses
        .iter()
        .map(|&hypothesis| {
            let outcome = info_span!("hypothesis", code = hypothesis.code())
                .in_scope(|| runner_for(hypothesis).run(df));
            if let Err(err) = &outcome {
                error!(hypothesis = hypothesis.code(), error = %err, "Hypothesis failed");
            }
            (hypothesis, outcome)
        })
        .collect()
}

fn write_charts(chart_dir: &Path, charts: &[(Hypothesis, &ChartSpec)]) -> Vec<(Hypothesis, PathBuf)> {
    info_span!("charts", dir = %chart_dir.display())
        .in_scope(|| write_chart_outputs(chart_dir, charts))
}
