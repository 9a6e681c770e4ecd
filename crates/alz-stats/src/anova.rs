//! One-way analysis of variance.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::descriptive::mean;
use crate::error::{Result, StatsError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaResult {
    /// F statistic.
    pub statistic: f64,
    pub p_value: f64,
    pub df_between: f64,
    pub df_within: f64,
}

/// One-way ANOVA F-test for equal means across groups.
///
/// Requires at least two groups, no empty group, and more observations than
/// groups. A NaN anywhere yields a NaN statistic and p-value.
pub fn f_oneway(groups: &[Vec<f64>]) -> Result<AnovaResult> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientGroups {
            test: "ANOVA",
            required: 2,
            found: groups.len(),
        });
    }
    if let Some(index) = groups.iter().position(Vec::is_empty) {
        return Err(StatsError::InsufficientData {
            test: "ANOVA",
            group: index.to_string(),
            required: 1,
            found: 0,
        });
    }

    let k = groups.len() as f64;
    let n: usize = groups.iter().map(Vec::len).sum();
    if n <= groups.len() {
        return Err(StatsError::InsufficientData {
            test: "ANOVA",
            group: "all".to_string(),
            required: groups.len() + 1,
            found: n,
        });
    }
    let n = n as f64;
    let df_between = k - 1.0;
    let df_within = n - k;

    if groups.iter().flatten().any(|v| v.is_nan()) {
        return Ok(AnovaResult {
            statistic: f64::NAN,
            p_value: f64::NAN,
            df_between,
            df_within,
        });
    }

    let grand_mean = groups.iter().flatten().sum::<f64>() / n;
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let group_mean = mean(group);
        ss_between += group.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += group.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    let statistic = (ss_between / df_between) / (ss_within / df_within);
    let p_value = if statistic.is_nan() {
        f64::NAN
    } else if statistic.is_infinite() {
        0.0
    } else {
        let distribution = FisherSnedecor::new(df_between, df_within)
            .map_err(|e| StatsError::Distribution(e.to_string()))?;
        distribution.sf(statistic)
    };

    Ok(AnovaResult {
        statistic,
        p_value,
        df_between,
        df_within,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_groups() {
        let groups = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![5.0, 6.0, 7.0],
        ];
        let result = f_oneway(&groups).unwrap();

        assert_eq!(result.df_between, 2.0);
        assert_eq!(result.df_within, 6.0);
        assert!((result.statistic - 6.0).abs() < 1e-12);
        assert!((result.p_value - 1.0 / 27.0).abs() < 1e-6);
    }

    #[test]
    fn test_identical_groups_are_not_different() {
        let groups = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]];
        let result = f_oneway(&groups).unwrap();

        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let groups = vec![vec![1.0, f64::NAN], vec![2.0, 3.0]];
        let result = f_oneway(&groups).unwrap();
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_constant_groups() {
        let apart = f_oneway(&[vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
        assert!(apart.statistic.is_infinite());
        assert_eq!(apart.p_value, 0.0);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(matches!(
            f_oneway(&[vec![1.0, 2.0]]),
            Err(StatsError::InsufficientGroups { found: 1, .. })
        ));
        assert!(matches!(
            f_oneway(&[vec![1.0, 2.0], vec![]]),
            Err(StatsError::InsufficientData { found: 0, .. })
        ));
        assert!(matches!(
            f_oneway(&[vec![1.0], vec![2.0]]),
            Err(StatsError::InsufficientData { required: 3, found: 2, .. })
        ));
    }
}
