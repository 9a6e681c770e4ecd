//! Value-level coercion rules.

use alz_common::{any_to_f64, any_to_string, is_numeric_dtype};
use alz_model::BINARY_MAP;
use polars::prelude::{AnyValue, Column, DataType, NamedFrom, PolarsResult, Series};

/// Maps a free-text token to 0/1.
///
/// The token is lower-cased and trimmed before lookup; anything outside the
/// binary map yields `None`.
pub fn encode_binary_token(token: &str) -> Option<i32> {
    let key = token.to_lowercase();
    let key = key.trim();
    BINARY_MAP
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Best-effort numeric coercion of a diagnosis value.
///
/// Numbers pass through, booleans become 0/1, numeric strings are parsed
/// after trimming. Everything else, including NaN, is missing.
pub fn coerce_numeric(value: AnyValue<'_>) -> Option<f64> {
    any_to_f64(value)
}

/// Coerces every value of a column, one entry per row.
pub(crate) fn coerce_column(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(coerce_numeric(column.get(idx)?));
    }
    Ok(values)
}

/// Result of encoding one lifestyle column.
pub(crate) struct EncodedColumn {
    pub series: Series,
    /// Whether the source was numeric and copied unchanged.
    pub passthrough: bool,
    /// Non-null source values that did not map to 0/1.
    pub unrecognized: usize,
}

/// Builds the `_bin` companion of a lifestyle column.
///
/// Numeric columns are copied unchanged (booleans as 0/1 integers); every
/// other dtype goes through [`encode_binary_token`] value by value.
pub(crate) fn encode_binary_column(column: &Column, target: &str) -> PolarsResult<EncodedColumn> {
    let dtype = column.dtype();

    if dtype == &DataType::Boolean {
        let mut values: Vec<Option<i32>> = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(match column.get(idx)? {
                AnyValue::Boolean(flag) => Some(i32::from(flag)),
                _ => None,
            });
        }
        return Ok(EncodedColumn {
            series: Series::new(target.into(), values),
            passthrough: true,
            unrecognized: 0,
        });
    }

    if is_numeric_dtype(dtype) {
        let series = column
            .as_materialized_series()
            .clone()
            .with_name(target.into());
        return Ok(EncodedColumn {
            series,
            passthrough: true,
            unrecognized: 0,
        });
    }

    let mut values: Vec<Option<i32>> = Vec::with_capacity(column.len());
    let mut unrecognized = 0usize;
    for idx in 0..column.len() {
        let encoded = match column.get(idx)? {
            AnyValue::Null => None,
            other => {
                let encoded = encode_binary_token(&any_to_string(other));
                if encoded.is_none() {
                    unrecognized += 1;
                }
                encoded
            }
        };
        values.push(encoded);
    }

    Ok(EncodedColumn {
        series: Series::new(target.into(), values),
        passthrough: false,
        unrecognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::IntoColumn;

    #[test]
    fn test_encode_binary_token_yes_variants() {
        for token in ["Yes", "yes", " Yes ", "YES", "true", "TRUE", "1"] {
            assert_eq!(encode_binary_token(token), Some(1), "token {token:?}");
        }
    }

    #[test]
    fn test_encode_binary_token_no_variants() {
        for token in ["No", "no", "NO", " false", "0 "] {
            assert_eq!(encode_binary_token(token), Some(0), "token {token:?}");
        }
    }

    #[test]
    fn test_encode_binary_token_unknown() {
        assert_eq!(encode_binary_token("maybe"), None);
        assert_eq!(encode_binary_token(""), None);
        assert_eq!(encode_binary_token("y"), None);
        assert_eq!(encode_binary_token("1.0"), None);
        assert_eq!(encode_binary_token("nan"), None);
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(AnyValue::Int64(1)), Some(1.0));
        assert_eq!(coerce_numeric(AnyValue::String("0")), Some(0.0));
        assert_eq!(coerce_numeric(AnyValue::String(" 1 ")), Some(1.0));
        assert_eq!(coerce_numeric(AnyValue::String("unknown")), None);
        assert_eq!(coerce_numeric(AnyValue::Null), None);
    }

    #[test]
    fn test_encode_numeric_column_is_copied() {
        let column = Series::new("Smoking".into(), vec![1i64, 0, 1]).into_column();
        let encoded = encode_binary_column(&column, "Smoking_bin").unwrap();

        assert!(encoded.passthrough);
        assert_eq!(encoded.series.name().as_str(), "Smoking_bin");
        assert_eq!(encoded.series.dtype(), &DataType::Int64);
        assert!(encoded.series.equals(&Series::new("Smoking_bin".into(), vec![1i64, 0, 1])));
    }

    #[test]
    fn test_encode_boolean_column() {
        let column = Series::new("Smoking".into(), vec![Some(true), Some(false), None]).into_column();
        let encoded = encode_binary_column(&column, "Smoking_bin").unwrap();

        assert!(encoded.passthrough);
        assert!(encoded.series.equals_missing(&Series::new(
            "Smoking_bin".into(),
            vec![Some(1i32), Some(0), None]
        )));
    }

    #[test]
    fn test_encode_text_column_counts_unrecognized() {
        let column =
            Series::new("Smoking".into(), vec![Some("Yes"), Some("maybe"), None, Some(" no ")])
                .into_column();
        let encoded = encode_binary_column(&column, "Smoking_bin").unwrap();

        assert!(!encoded.passthrough);
        assert_eq!(encoded.unrecognized, 1);
        assert!(encoded.series.equals_missing(&Series::new(
            "Smoking_bin".into(),
            vec![Some(1i32), None, None, Some(0)]
        )));
    }
}
