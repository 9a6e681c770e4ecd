//! H4: physical activity by diagnosis.

use alz_common::format_p_value;
use alz_model::columns::{DIAGNOSIS_BIN, PHYSICAL_ACTIVITY};
use alz_model::{
    ChartSpec, GroupSummary, Hypothesis, HypothesisResult, PALETTE, PointChart, PointEstimate,
};
use alz_stats::{NanPolicy, mean_interval, ttest_ind};
use polars::prelude::DataFrame;

use crate::error::{AnalysisError, Result};
use crate::extract::{finite, require_columns, split_by_indicator};
use crate::runner::{HypothesisOutcome, HypothesisRunner, result_line};

/// Pooled t-test of `PhysicalActivity` between healthy (`Diagnosis_bin` = 0)
/// and diagnosed (`Diagnosis_bin` = 1) participants. Missing activity values
/// are omitted.
///
/// Activity scores in this dataset were recorded after diagnosis, so a
/// difference here says nothing about activity as a cause.
pub struct PhysicalActivityRunner;

impl HypothesisRunner for PhysicalActivityRunner {
    fn hypothesis(&self) -> Hypothesis {
        Hypothesis::PhysicalActivity
    }

    fn run(&self, df: &DataFrame) -> Result<HypothesisOutcome> {
        let hypothesis = self.hypothesis();
        require_columns(df, hypothesis, &[PHYSICAL_ACTIVITY, DIAGNOSIS_BIN])?;

        let (healthy, alzheimer) = split_by_indicator(df, PHYSICAL_ACTIVITY, DIAGNOSIS_BIN)?;
        let test = ttest_ind(&healthy, &alzheimer, NanPolicy::Omit)
            .map_err(AnalysisError::stats(hypothesis))?;

        let mut groups = Vec::with_capacity(2);
        let mut points = Vec::with_capacity(2);
        for (label, values, color) in [
            ("Healthy", finite(&healthy), PALETTE[2]),
            ("Alzheimer", finite(&alzheimer), PALETTE[0]),
        ] {
            let (mean, lower, upper) = mean_interval(&values);
            groups.push(GroupSummary {
                label: label.to_string(),
                count: values.len(),
                mean,
            });
            points.push(PointEstimate {
                label: label.to_string(),
                mean,
                lower,
                upper,
                color,
            });
        }

        let result = HypothesisResult::new(
            hypothesis,
            test.statistic,
            test.p_value,
            vec![test.df],
            groups,
        );
        let chart = ChartSpec::Point(PointChart {
            title: hypothesis.title().to_string(),
            subtitle: result_line("Result", &result),
            x_label: "Diagnosis Group".to_string(),
            y_label: "Average Physical Activity Score".to_string(),
            points,
        });

        tracing::info!(
            hypothesis = hypothesis.code(),
            statistic = test.statistic,
            p_value = test.p_value,
            "Physical activity analysis complete. P-value: {}",
            format_p_value(test.p_value)
        );

        Ok(HypothesisOutcome { result, chart })
    }
}
