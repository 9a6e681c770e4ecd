//! Hypothesis runner trait and registry.
//!
//! Each hypothesis is a unit struct implementing [`HypothesisRunner`]. The
//! runners only read the normalized table, so they can be called in any
//! order or from several threads at once.
//!
//! # Example
//!
//! ```ignore
//! use alz_analysis::default_runners;
//!
//! for runner in default_runners() {
//!     let outcome = runner.run(&clean)?;
//!     println!("{}: p = {:.4}", outcome.result.hypothesis, outcome.result.p_value);
//! }
//! ```

use alz_common::format_p_value;
use alz_model::{ChartSpec, Hypothesis, HypothesisResult};
use polars::prelude::DataFrame;

use crate::education::EducationRunner;
use crate::error::Result;
use crate::lifestyle::LifestyleRunner;
use crate::physical_activity::PhysicalActivityRunner;
use crate::sleep::SleepRunner;

/// Test result plus the chart describing it.
#[derive(Debug, Clone)]
pub struct HypothesisOutcome {
    pub result: HypothesisResult,
    pub chart: ChartSpec,
}

/// A read-only analysis of the normalized dataset.
pub trait HypothesisRunner: Send + Sync {
    fn hypothesis(&self) -> Hypothesis;

    /// Runs the statistical test and builds the chart specification.
    ///
    /// # Errors
    ///
    /// Returns an error when a required column is missing or the test cannot
    /// be computed (for example an empty comparison group).
    fn run(&self, df: &DataFrame) -> Result<HypothesisOutcome>;
}

/// All runners in pipeline order: lifestyle, physical activity, education, sleep.
pub fn default_runners() -> Vec<Box<dyn HypothesisRunner>> {
    Hypothesis::ALL.into_iter().map(runner_for).collect()
}

/// The runner for one hypothesis.
pub fn runner_for(hypothesis: Hypothesis) -> Box<dyn HypothesisRunner> {
    match hypothesis {
        Hypothesis::Lifestyle => Box::new(LifestyleRunner),
        Hypothesis::PhysicalActivity => Box::new(PhysicalActivityRunner),
        Hypothesis::Education => Box::new(EducationRunner),
        Hypothesis::Sleep => Box::new(SleepRunner),
    }
}

/// Chart subtitle: `"<prefix>: <Significant|Not Significant> (p = 0.0123)"`.
pub(crate) fn result_line(prefix: &str, result: &HypothesisResult) -> String {
    format!(
        "{prefix}: {} (p = {})",
        result.significance,
        format_p_value(result.p_value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_pipeline_order() {
        let order: Vec<_> = default_runners().iter().map(|r| r.hypothesis()).collect();
        assert_eq!(order, Hypothesis::ALL.to_vec());
    }

    #[test]
    fn runner_for_matches_hypothesis() {
        for hypothesis in Hypothesis::ALL {
            assert_eq!(runner_for(hypothesis).hypothesis(), hypothesis);
        }
    }

    #[test]
    fn result_line_format() {
        let result = HypothesisResult::new(Hypothesis::Sleep, 2.5, 0.012_34, vec![10.0], vec![]);
        insta::assert_snapshot!(
            result_line("T-test Result", &result),
            @"T-test Result: Significant (p = 0.0123)"
        );
    }
}
