//! H2: MMSE across education levels.

use alz_common::format_p_value;
use alz_model::columns::{EDUCATION_LEVEL, MMSE};
use alz_model::{
    ChartSpec, GroupSummary, Hypothesis, HypothesisResult, PALETTE, PointChart, PointEstimate,
};
use alz_stats::{f_oneway, mean_interval};
use polars::prelude::DataFrame;

use crate::error::{AnalysisError, Result};
use crate::extract::{finite, group_by_key, require_columns};
use crate::runner::{HypothesisOutcome, HypothesisRunner, result_line};

/// One-way ANOVA of `MMSE` across every distinct `EducationLevel`.
///
/// Levels are taken in ascending order. Rows without a level are skipped;
/// a missing MMSE score inside a level makes the result NaN.
pub struct EducationRunner;

impl HypothesisRunner for EducationRunner {
    fn hypothesis(&self) -> Hypothesis {
        Hypothesis::Education
    }

    fn run(&self, df: &DataFrame) -> Result<HypothesisOutcome> {
        let hypothesis = self.hypothesis();
        require_columns(df, hypothesis, &[MMSE, EDUCATION_LEVEL])?;

        let levels = group_by_key(df, MMSE, EDUCATION_LEVEL)?;
        let samples: Vec<Vec<f64>> = levels.iter().map(|(_, values)| values.clone()).collect();
        let test = f_oneway(&samples).map_err(AnalysisError::stats(hypothesis))?;

        let mut groups = Vec::with_capacity(levels.len());
        let mut points = Vec::with_capacity(levels.len());
        for (key, values) in &levels {
            // the chart skips missing scores like a plotting library would
            let values = finite(values);
            let (mean, lower, upper) = mean_interval(&values);
            groups.push(GroupSummary {
                label: key.label(),
                count: values.len(),
                mean,
            });
            points.push(PointEstimate {
                label: key.label(),
                mean,
                lower,
                upper,
                color: PALETTE[0],
            });
        }

        let result = HypothesisResult::new(
            hypothesis,
            test.statistic,
            test.p_value,
            vec![test.df_between, test.df_within],
            groups,
        );
        let chart = ChartSpec::Point(PointChart {
            title: hypothesis.title().to_string(),
            subtitle: result_line("ANOVA Result", &result),
            x_label: EDUCATION_LEVEL.to_string(),
            y_label: MMSE.to_string(),
            points,
        });

        tracing::info!(
            hypothesis = hypothesis.code(),
            levels = levels.len(),
            statistic = test.statistic,
            p_value = test.p_value,
            "Education analysis complete. P-value: {}",
            format_p_value(test.p_value)
        );

        Ok(HypothesisOutcome { result, chart })
    }
}
