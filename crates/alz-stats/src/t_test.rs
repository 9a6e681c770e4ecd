//! Independent two-sample t-test (pooled variance).

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::descriptive::{mean, sample_variance};
use crate::error::{Result, StatsError};

/// How NaN values in the samples are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Any NaN makes the statistic and p-value NaN.
    #[default]
    Propagate,
    /// NaN values are dropped before testing.
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    pub statistic: f64,
    pub p_value: f64,
    /// Degrees of freedom, `n1 + n2 - 2`.
    pub df: f64,
}

/// Two-sided Student's t-test for the means of two independent samples,
/// assuming equal variances.
///
/// Each sample needs at least one value (after omitting NaN when
/// [`NanPolicy::Omit`] is used). A sample with a single value has no
/// variance, so the statistic and p-value come out NaN.
pub fn ttest_ind(first: &[f64], second: &[f64], policy: NanPolicy) -> Result<TTestResult> {
    let (first, second): (Vec<f64>, Vec<f64>) = match policy {
        NanPolicy::Omit => (
            first.iter().copied().filter(|v| !v.is_nan()).collect(),
            second.iter().copied().filter(|v| !v.is_nan()).collect(),
        ),
        NanPolicy::Propagate => (first.to_vec(), second.to_vec()),
    };

    for (group, values) in [("first", &first), ("second", &second)] {
        if values.is_empty() {
            return Err(StatsError::InsufficientData {
                test: "t-test",
                group: group.to_string(),
                required: 1,
                found: 0,
            });
        }
    }

    let n1 = first.len() as f64;
    let n2 = second.len() as f64;
    let df = n1 + n2 - 2.0;

    if first.len() < 2 || second.len() < 2 || first.iter().chain(&second).any(|v| v.is_nan()) {
        return Ok(TTestResult {
            statistic: f64::NAN,
            p_value: f64::NAN,
            df,
        });
    }

    let pooled =
        ((n1 - 1.0) * sample_variance(&first) + (n2 - 1.0) * sample_variance(&second)) / df;
    let standard_error = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    let statistic = (mean(&first) - mean(&second)) / standard_error;

    let p_value = if statistic.is_nan() {
        f64::NAN
    } else if statistic.is_infinite() {
        0.0
    } else {
        let distribution =
            StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
        (2.0 * distribution.sf(statistic.abs())).min(1.0)
    };

    Ok(TTestResult {
        statistic,
        p_value,
        df,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pooled_t_test() {
        let result = ttest_ind(&[1.0, 3.0], &[4.0, 8.0], NanPolicy::Propagate).unwrap();

        assert_eq!(result.df, 2.0);
        assert!((result.statistic + 1.788_854_381_999_831_7).abs() < 1e-9);
        assert!((result.p_value - 0.215_535_459_447_263_82).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_in_sign_only() {
        let forward = ttest_ind(&[1.0, 3.0], &[4.0, 8.0], NanPolicy::Propagate).unwrap();
        let backward = ttest_ind(&[4.0, 8.0], &[1.0, 3.0], NanPolicy::Propagate).unwrap();

        assert!((forward.statistic + backward.statistic).abs() < 1e-12);
        assert!((forward.p_value - backward.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_omit_drops_nan() {
        let result = ttest_ind(&[1.0, f64::NAN, 3.0], &[4.0, 8.0], NanPolicy::Omit).unwrap();
        assert!((result.p_value - 0.215_535_459_447_263_82).abs() < 1e-6);
    }

    #[test]
    fn test_propagate_returns_nan() {
        let result = ttest_ind(&[1.0, f64::NAN, 3.0], &[4.0, 8.0], NanPolicy::Propagate).unwrap();
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_single_value_group_is_nan() {
        let result = ttest_ind(&[1.0], &[2.0, 3.0], NanPolicy::Omit).unwrap();
        assert_eq!(result.df, 1.0);
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());

        let both = ttest_ind(&[1.0], &[2.0], NanPolicy::Propagate).unwrap();
        assert_eq!(both.df, 0.0);
        assert!(both.p_value.is_nan());
    }

    #[test]
    fn test_requires_a_value_per_group() {
        let err = ttest_ind(&[1.0, 2.0], &[], NanPolicy::Propagate).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientData {
                test: "t-test",
                group: "second".to_string(),
                required: 1,
                found: 0,
            }
        );

        let err = ttest_ind(&[1.0, 2.0], &[f64::NAN, f64::NAN], NanPolicy::Omit).unwrap_err();
        assert!(matches!(err, StatsError::InsufficientData { found: 0, .. }));
    }

    #[test]
    fn test_constant_samples() {
        let same = ttest_ind(&[2.0, 2.0], &[2.0, 2.0], NanPolicy::Propagate).unwrap();
        assert!(same.statistic.is_nan());
        assert!(same.p_value.is_nan());

        let apart = ttest_ind(&[1.0, 1.0], &[2.0, 2.0], NanPolicy::Propagate).unwrap();
        assert!(apart.statistic.is_infinite());
        assert_eq!(apart.p_value, 0.0);
    }
}
