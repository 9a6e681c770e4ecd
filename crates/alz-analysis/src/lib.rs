//! Hypothesis runners.
//!
//! | Runner                     | Hypothesis                          | Test       |
//! |----------------------------|-------------------------------------|------------|
//! | [`LifestyleRunner`]        | H1 smoking vs diagnosis             | Chi-square |
//! | [`PhysicalActivityRunner`] | H4 physical activity by diagnosis   | T-test     |
//! | [`EducationRunner`]        | H2 MMSE by education level          | ANOVA      |
//! | [`SleepRunner`]            | H3 sleep quality vs memory          | T-test     |
//!
//! Every runner expects the output of `alz_normalization::normalize` and
//! never modifies it.

mod education;
mod error;
mod extract;
mod lifestyle;
mod physical_activity;
mod runner;
mod sleep;

pub use education::EducationRunner;
pub use error::{AnalysisError, Result};
pub use lifestyle::LifestyleRunner;
pub use physical_activity::PhysicalActivityRunner;
pub use runner::{HypothesisOutcome, HypothesisRunner, default_runners, runner_for};
pub use sleep::SleepRunner;
