//! H1: smoking vs diagnosis.

use alz_common::{format_numeric, format_p_value};
use alz_model::columns::{DIAGNOSIS_BIN, SMOKING_BIN};
use alz_model::{Bar, BarChart, ChartSpec, GroupSummary, Hypothesis, HypothesisResult, PALETTE};
use alz_stats::{ContingencyTable, chi2_contingency, mean};
use polars::prelude::DataFrame;

use crate::error::{AnalysisError, Result};
use crate::extract::{pairs, require_columns};
use crate::runner::{HypothesisOutcome, HypothesisRunner, result_line};

/// Chi-square test of independence between `Smoking_bin` and `Diagnosis_bin`.
///
/// Rows missing either value are left out of the contingency table.
pub struct LifestyleRunner;

impl HypothesisRunner for LifestyleRunner {
    fn hypothesis(&self) -> Hypothesis {
        Hypothesis::Lifestyle
    }

    fn run(&self, df: &DataFrame) -> Result<HypothesisOutcome> {
        let hypothesis = self.hypothesis();
        require_columns(df, hypothesis, &[SMOKING_BIN, DIAGNOSIS_BIN])?;

        let observations = pairs(df, SMOKING_BIN, DIAGNOSIS_BIN)?;
        let table = ContingencyTable::from_pairs(&observations);
        let test = chi2_contingency(&table, true).map_err(AnalysisError::stats(hypothesis))?;

        // diagnosis rate per smoking category, in table order
        let mut groups = Vec::with_capacity(table.rows());
        for &category in &table.row_labels {
            let diagnoses: Vec<f64> = observations
                .iter()
                .filter(|(smoking, diagnosis)| *smoking == category && !diagnosis.is_nan())
                .map(|(_, diagnosis)| *diagnosis)
                .collect();
            groups.push(GroupSummary {
                label: format_numeric(category),
                count: diagnoses.len(),
                mean: mean(&diagnoses),
            });
        }

        let result = HypothesisResult::new(
            hypothesis,
            test.statistic,
            test.p_value,
            vec![test.dof as f64],
            groups,
        );

        let bars = result
            .groups
            .iter()
            .enumerate()
            .map(|(idx, group)| Bar {
                label: group.label.clone(),
                value: group.mean,
                color: PALETTE[idx % 2],
            })
            .collect();
        let chart = ChartSpec::Bar(BarChart {
            title: hypothesis.title().to_string(),
            subtitle: result_line("Result", &result),
            x_label: "Smoking Status (0=No, 1=Yes)".to_string(),
            y_label: "AD Diagnosis Rate".to_string(),
            bars,
        });

        tracing::info!(
            hypothesis = hypothesis.code(),
            statistic = test.statistic,
            p_value = test.p_value,
            "Lifestyle analysis complete. P-value: {}",
            format_p_value(test.p_value)
        );

        Ok(HypothesisOutcome { result, chart })
    }
}
