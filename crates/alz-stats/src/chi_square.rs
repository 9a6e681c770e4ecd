//! Chi-square test of independence on a contingency table.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{Result, StatsError};

/// Observed frequencies with their row and column category labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    pub row_labels: Vec<f64>,
    pub column_labels: Vec<f64>,
    pub counts: Vec<Vec<f64>>,
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut labels: Vec<f64> = values.collect();
    labels.sort_by(f64::total_cmp);
    labels.dedup_by(|a, b| a.total_cmp(b).is_eq());
    labels
}

impl ContingencyTable {
    /// Cross-tabulates paired observations.
    ///
    /// Categories are the distinct observed values in ascending order; pairs
    /// with a NaN on either side are ignored.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let pairs: Vec<(f64, f64)> = pairs
            .iter()
            .copied()
            .filter(|(row, column)| !row.is_nan() && !column.is_nan())
            .collect();
        let row_labels = sorted_unique(pairs.iter().map(|(row, _)| *row));
        let column_labels = sorted_unique(pairs.iter().map(|(_, column)| *column));
        let mut counts = vec![vec![0.0; column_labels.len()]; row_labels.len()];
        for (row, column) in pairs {
            let r = row_labels
                .iter()
                .position(|label| label.total_cmp(&row).is_eq());
            let c = column_labels
                .iter()
                .position(|label| label.total_cmp(&column).is_eq());
            if let (Some(r), Some(c)) = (r, c) {
                counts[r][c] += 1.0;
            }
        }
        Self {
            row_labels,
            column_labels,
            counts,
        }
    }

    /// Wraps raw counts, labelling rows and columns 0, 1, 2, ...
    pub fn from_counts(counts: Vec<Vec<f64>>) -> Self {
        let rows = counts.len();
        let columns = counts.first().map_or(0, Vec::len);
        Self {
            row_labels: (0..rows).map(|i| i as f64).collect(),
            column_labels: (0..columns).map(|i| i as f64).collect(),
            counts,
        }
    }

    pub fn rows(&self) -> usize {
        self.counts.len()
    }

    pub fn columns(&self) -> usize {
        self.counts.first().map_or(0, Vec::len)
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().flatten().sum()
    }

    pub fn row_totals(&self) -> Vec<f64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.columns())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
    pub expected: Vec<Vec<f64>>,
}

/// Chi-square test of independence.
///
/// With `correction` set, a 2×2 table (one degree of freedom) gets the Yates
/// continuity correction: each |observed - expected| shrinks by at most 0.5.
/// A table with zero degrees of freedom yields a statistic of 0 and p = 1.
pub fn chi2_contingency(table: &ContingencyTable, correction: bool) -> Result<ChiSquareResult> {
    if table.rows() == 0 || table.columns() == 0 {
        return Err(StatsError::EmptyTable);
    }
    let width = table.columns();
    for (r, row) in table.counts.iter().enumerate() {
        if row.len() != width {
            return Err(StatsError::RaggedTable);
        }
        if let Some(c) = row.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(StatsError::InvalidCount { row: r, column: c });
        }
    }

    let total = table.total();
    let row_totals = table.row_totals();
    let column_totals = table.column_totals();
    let expected: Vec<Vec<f64>> = row_totals
        .iter()
        .map(|row_total| {
            column_totals
                .iter()
                .map(|column_total| row_total * column_total / total)
                .collect()
        })
        .collect();

    for (r, row) in expected.iter().enumerate() {
        if let Some(c) = row.iter().position(|e| *e == 0.0 || e.is_nan()) {
            return Err(StatsError::ZeroExpected { row: r, column: c });
        }
    }

    let dof = (table.rows() - 1) * (width - 1);
    if dof == 0 {
        return Ok(ChiSquareResult {
            statistic: 0.0,
            p_value: 1.0,
            dof,
            expected,
        });
    }

    let yates = correction && dof == 1;
    let mut statistic = 0.0;
    for (observed_row, expected_row) in table.counts.iter().zip(&expected) {
        for (observed, expected) in observed_row.iter().zip(expected_row) {
            let mut diff = observed - expected;
            if yates {
                diff = diff.signum() * (diff.abs() - 0.5).max(0.0);
            }
            statistic += diff * diff / expected;
        }
    }

    let distribution =
        ChiSquared::new(dof as f64).map_err(|e| StatsError::Distribution(e.to_string()))?;
    let p_value = distribution.sf(statistic);

    Ok(ChiSquareResult {
        statistic,
        p_value,
        dof,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(counts: &[&[f64]]) -> ContingencyTable {
        ContingencyTable::from_counts(counts.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn test_two_by_two_with_yates_correction() {
        let result = chi2_contingency(&table(&[&[10.0, 20.0], &[30.0, 40.0]]), true).unwrap();

        assert_eq!(result.dof, 1);
        assert!((result.statistic - 0.446_428_571_428_571_4).abs() < 1e-9);
        assert!((result.p_value - 0.504_035_866_452_504_8).abs() < 1e-6);
        assert_eq!(result.expected, vec![vec![12.0, 18.0], vec![28.0, 42.0]]);
    }

    #[test]
    fn test_two_by_two_without_correction() {
        let result = chi2_contingency(&table(&[&[10.0, 20.0], &[30.0, 40.0]]), false).unwrap();

        assert!((result.statistic - 0.793_650_793_650_793_6).abs() < 1e-9);
        assert!((result.p_value - 0.372_998_483_613_487_14).abs() < 1e-6);
    }

    #[test]
    fn test_two_by_three_ignores_correction() {
        let result =
            chi2_contingency(&table(&[&[10.0, 20.0, 30.0], &[20.0, 20.0, 10.0]]), true).unwrap();

        assert_eq!(result.dof, 2);
        assert!((result.statistic - 12.527_777_777_777_78).abs() < 1e-9);
        assert!((result.p_value - 0.001_903_827_607_695_494).abs() < 1e-6);
    }

    #[test]
    fn test_correction_clamps_at_zero() {
        // expected 2.5 everywhere, |o - e| = 0.5
        let result = chi2_contingency(&table(&[&[3.0, 2.0], &[2.0, 3.0]]), true).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_row_has_zero_dof() {
        let result = chi2_contingency(&table(&[&[5.0, 7.0]]), true).unwrap();
        assert_eq!(result.dof, 0);
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(
            chi2_contingency(&ContingencyTable::from_counts(vec![]), true),
            Err(StatsError::EmptyTable)
        );
        assert_eq!(
            chi2_contingency(&table(&[&[1.0, 2.0], &[3.0]]), true),
            Err(StatsError::RaggedTable)
        );
        assert_eq!(
            chi2_contingency(&table(&[&[1.0, -2.0], &[3.0, 4.0]]), true),
            Err(StatsError::InvalidCount { row: 0, column: 1 })
        );
        assert_eq!(
            chi2_contingency(&table(&[&[0.0, 2.0], &[0.0, 4.0]]), true),
            Err(StatsError::ZeroExpected { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_from_pairs_sorts_categories_and_skips_nan() {
        let pairs = [
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
        ];
        let table = ContingencyTable::from_pairs(&pairs);

        assert_eq!(table.row_labels, vec![0.0, 1.0]);
        assert_eq!(table.column_labels, vec![0.0, 1.0]);
        assert_eq!(table.counts, vec![vec![0.0, 1.0], vec![1.0, 2.0]]);
        assert_eq!(table.total(), 4.0);
    }
}
