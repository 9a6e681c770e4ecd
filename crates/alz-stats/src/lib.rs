//! Classical hypothesis tests.
//!
//! - [`chi2_contingency`]: chi-square test of independence, Yates-corrected
//!   for 2×2 tables
//! - [`ttest_ind`]: pooled-variance two-sample t-test with a [`NanPolicy`]
//! - [`f_oneway`]: one-way ANOVA
//!
//! Tail probabilities come from `statrs` distributions. Inputs are plain
//! `f64` slices so the tests stay independent of the table library.

mod anova;
mod chi_square;
mod descriptive;
mod error;
mod t_test;

pub use anova::{AnovaResult, f_oneway};
pub use chi_square::{ChiSquareResult, ContingencyTable, chi2_contingency};
pub use descriptive::{
    Z_95, gaussian_kde, linspace, mean, mean_interval, sample_std, sample_variance,
};
pub use error::{Result, StatsError};
pub use t_test::{NanPolicy, TTestResult, ttest_ind};
