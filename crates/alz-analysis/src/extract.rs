//! Column extraction shared by the runners.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use alz_common::{
    any_to_f64, any_to_string, column_f64_values, format_numeric, has_column, is_numeric_dtype,
    parse_f64,
};
use alz_model::Hypothesis;
use polars::prelude::{AnyValue, DataFrame};

use crate::error::{AnalysisError, Result};

/// Fails with [`AnalysisError::MissingColumn`] unless every column exists.
pub(crate) fn require_columns(
    df: &DataFrame,
    hypothesis: Hypothesis,
    columns: &[&str],
) -> Result<()> {
    for column in columns {
        if !has_column(df, column) {
            return Err(AnalysisError::MissingColumn {
                hypothesis,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Values of `value_column` split by a 0/1 indicator column.
///
/// Rows whose indicator is missing or not 0/1 are skipped. Missing values
/// are kept as NaN so the caller's NaN policy decides what happens to them.
pub(crate) fn split_by_indicator(
    df: &DataFrame,
    value_column: &str,
    indicator_column: &str,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let values = column_f64_values(df, value_column)?;
    let indicator = column_f64_values(df, indicator_column)?;
    let mut zero = Vec::new();
    let mut one = Vec::new();
    for (value, flag) in values.into_iter().zip(indicator) {
        let value = value.unwrap_or(f64::NAN);
        match flag {
            Some(flag) if flag == 0.0 => zero.push(value),
            Some(flag) if flag == 1.0 => one.push(value),
            _ => {}
        }
    }
    Ok((zero, one))
}

/// Paired values of two columns; missing values become NaN.
pub(crate) fn pairs(df: &DataFrame, first: &str, second: &str) -> Result<Vec<(f64, f64)>> {
    let first = column_f64_values(df, first)?;
    let second = column_f64_values(df, second)?;
    Ok(first
        .into_iter()
        .zip(second)
        .map(|(a, b)| (a.unwrap_or(f64::NAN), b.unwrap_or(f64::NAN)))
        .collect())
}

/// Distinct value of a grouping column.
///
/// Numeric keys order numerically, text keys lexically.
#[derive(Debug, Clone)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    pub fn label(&self) -> String {
        match self {
            GroupKey::Number(value) => format_numeric(*value),
            GroupKey::Text(value) => value.clone(),
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GroupKey::Number(a), GroupKey::Number(b)) => a.total_cmp(b),
            (GroupKey::Text(a), GroupKey::Text(b)) => a.cmp(b),
            (GroupKey::Number(_), GroupKey::Text(_)) => Ordering::Less,
            (GroupKey::Text(_), GroupKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Values of `value_column` grouped by each distinct non-missing key, in
/// ascending key order. Missing values are kept as NaN.
///
/// A text column whose keys all read as numbers is grouped numerically, so
/// levels stored as text still order `2` before `10`.
pub(crate) fn group_by_key(
    df: &DataFrame,
    value_column: &str,
    key_column: &str,
) -> Result<Vec<(GroupKey, Vec<f64>)>> {
    let values = column_f64_values(df, value_column)?;
    let keys = df.column(key_column)?;
    let numeric = is_numeric_dtype(keys.dtype());

    let mut keyed = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        let key = match keys.get(idx)? {
            AnyValue::Null => None,
            raw if numeric => any_to_f64(raw).map(GroupKey::Number),
            raw => {
                let text = any_to_string(raw);
                let text = text.trim();
                (!text.is_empty()).then(|| GroupKey::Text(text.to_string()))
            }
        };
        if let Some(key) = key {
            keyed.push((key, value.unwrap_or(f64::NAN)));
        }
    }

    let numeric_text = !numeric
        && keyed.iter().all(|(key, _)| match key {
            GroupKey::Text(text) => parse_f64(text).is_some_and(|v| !v.is_nan()),
            GroupKey::Number(_) => true,
        });

    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for (key, value) in keyed {
        let key = match key {
            GroupKey::Text(text) if numeric_text => parse_f64(&text)
                .map(GroupKey::Number)
                .unwrap_or(GroupKey::Text(text)),
            key => key,
        };
        groups.entry(key).or_default().push(value);
    }
    Ok(groups.into_iter().collect())
}

/// Drops NaN values.
pub(crate) fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}
