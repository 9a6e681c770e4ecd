//! H3: sleep quality vs memory complaints.

use alz_common::format_p_value;
use alz_model::columns::{MEMORY_COMPLAINTS_BIN, SLEEP_QUALITY};
use alz_model::{
    ChartSpec, DensityChart, DensitySeries, GroupSummary, Hypothesis, HypothesisResult, PALETTE,
};
use alz_stats::{NanPolicy, gaussian_kde, linspace, mean, sample_std, ttest_ind};
use polars::prelude::DataFrame;

use crate::error::{AnalysisError, Result};
use crate::extract::{finite, require_columns, split_by_indicator};
use crate::runner::{HypothesisOutcome, HypothesisRunner, result_line};

/// Number of grid points each density curve is evaluated on.
const DENSITY_POINTS: usize = 200;

/// Pooled t-test of `SleepQuality` between participants without (0) and with
/// (1) memory complaints. Missing sleep scores propagate to a NaN result.
pub struct SleepRunner;

impl HypothesisRunner for SleepRunner {
    fn hypothesis(&self) -> Hypothesis {
        Hypothesis::Sleep
    }

    fn run(&self, df: &DataFrame) -> Result<HypothesisOutcome> {
        let hypothesis = self.hypothesis();
        require_columns(df, hypothesis, &[SLEEP_QUALITY, MEMORY_COMPLAINTS_BIN])?;

        let (no_complaints, complaints) =
            split_by_indicator(df, SLEEP_QUALITY, MEMORY_COMPLAINTS_BIN)?;
        let test = ttest_ind(&no_complaints, &complaints, NanPolicy::Propagate)
            .map_err(AnalysisError::stats(hypothesis))?;

        let samples = [finite(&no_complaints), finite(&complaints)];
        let groups = samples
            .iter()
            .enumerate()
            .map(|(flag, values)| GroupSummary {
                label: flag.to_string(),
                count: values.len(),
                mean: mean(values),
            })
            .collect();

        let result = HypothesisResult::new(
            hypothesis,
            test.statistic,
            test.p_value,
            vec![test.df],
            groups,
        );
        let chart = ChartSpec::Density(DensityChart {
            title: hypothesis.title().to_string(),
            subtitle: result_line("T-test Result", &result),
            x_label: SLEEP_QUALITY.to_string(),
            y_label: "Density".to_string(),
            series: density_series(&samples),
        });

        tracing::info!(
            hypothesis = hypothesis.code(),
            statistic = test.statistic,
            p_value = test.p_value,
            "Sleep analysis complete. P-value: {}",
            format_p_value(test.p_value)
        );

        Ok(HypothesisOutcome { result, chart })
    }
}

/// One KDE curve per group on a shared grid.
///
/// Each curve is weighted by its group's share of the observations so the
/// curves together integrate to one. Groups too small or too flat for a
/// bandwidth are left out.
fn density_series(samples: &[Vec<f64>; 2]) -> Vec<DensitySeries> {
    let all: Vec<f64> = samples.iter().flatten().copied().collect();
    let (Some(min), Some(max)) = (
        all.iter().copied().reduce(f64::min),
        all.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };

    // pad the grid by three bandwidths of the pooled sample
    let pad = 3.0 * sample_std(&all).max(0.0) * (all.len() as f64).powf(-0.2);
    let pad = if pad.is_finite() { pad } else { 0.0 };
    let grid = linspace(min - pad, max + pad, DENSITY_POINTS);
    let total = all.len() as f64;

    samples
        .iter()
        .enumerate()
        .filter_map(|(flag, values)| {
            let density = gaussian_kde(values, &grid)?;
            let share = values.len() as f64 / total;
            Some(DensitySeries {
                label: flag.to_string(),
                color: PALETTE[2 + flag],
                points: grid
                    .iter()
                    .zip(density)
                    .map(|(&x, y)| (x, y * share))
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_curves_share_the_mass() {
        let samples = [vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0]];
        let series = density_series(&samples);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].color, PALETTE[2]);
        assert_eq!(series[1].color, PALETTE[3]);

        // trapezoidal integral over both curves is close to one
        let area: f64 = series
            .iter()
            .map(|s| {
                s.points
                    .windows(2)
                    .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
                    .sum::<f64>()
            })
            .sum();
        assert!((area - 1.0).abs() < 0.05, "area was {area}");
    }

    #[test]
    fn flat_group_has_no_curve() {
        let samples = [vec![2.0, 2.0, 2.0], vec![1.0, 3.0, 5.0]];
        let series = density_series(&samples);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "1");
    }

    #[test]
    fn empty_samples_have_no_curves() {
        assert!(density_series(&[Vec::new(), Vec::new()]).is_empty());
    }
}
