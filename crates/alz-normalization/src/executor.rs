//! Dataset normalization execution.
//!
//! Produces a cleaned copy of the source frame with a numeric diagnosis
//! column and binary lifestyle/symptom columns, dropping rows that have no
//! usable diagnosis.

use std::collections::BTreeMap;

use alz_common::has_column;
use alz_model::columns::{DIAGNOSIS, DIAGNOSIS_BIN};
use alz_model::{BINARY_COLUMNS, bin_column};
use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use crate::encoding::{coerce_column, encode_binary_column};
use crate::error::Result;

/// Row and column bookkeeping from one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows removed because the diagnosis could not be coerced.
    pub dropped_rows: usize,
    /// Whether `Diagnosis` was present, so the row filter applied.
    pub diagnosis_present: bool,
    /// Source columns that received a `_bin` companion.
    pub encoded_columns: Vec<String>,
    /// Per source column, text values left missing because they were not recognized.
    pub unrecognized_tokens: BTreeMap<String, usize>,
}

/// Normalizes the dataset and returns the cleaned copy.
///
/// See [`normalize_with_summary`] for the rules.
pub fn normalize(source: &DataFrame) -> Result<DataFrame> {
    normalize_with_summary(source).map(|(df, _)| df)
}

/// Normalizes the dataset, returning the cleaned copy and a summary.
///
/// 1. `Diagnosis` is coerced to numbers into `Diagnosis_bin`; values that
///    cannot be coerced become null.
/// 2. `Smoking` and `MemoryComplaints`, when present, get a `_bin` column:
///    numeric columns are copied as-is, text is lower-cased, trimmed and
///    mapped through the binary lookup table (unknown tokens become null).
/// 3. Rows whose `Diagnosis_bin` is null are dropped. Without a `Diagnosis`
///    column nothing is dropped.
///
/// The source frame is never modified and retained rows keep their order.
pub fn normalize_with_summary(source: &DataFrame) -> Result<(DataFrame, NormalizationSummary)> {
    let mut df = source.clone();
    let mut summary = NormalizationSummary {
        input_rows: df.height(),
        ..NormalizationSummary::default()
    };

    let mut keep: Option<Vec<bool>> = None;
    if has_column(&df, DIAGNOSIS) {
        let values = coerce_column(df.column(DIAGNOSIS)?)?;
        keep = Some(values.iter().map(Option::is_some).collect());
        df.with_column(Series::new(DIAGNOSIS_BIN.into(), values))?;
        summary.diagnosis_present = true;
    }

    for name in BINARY_COLUMNS {
        if !has_column(&df, name) {
            continue;
        }
        let target = bin_column(name);
        let encoded = encode_binary_column(df.column(name)?, &target)?;
        tracing::debug!(
            column = name,
            target = %target,
            passthrough = encoded.passthrough,
            unrecognized = encoded.unrecognized,
            "Encoded binary column"
        );
        if encoded.unrecognized > 0 {
            summary
                .unrecognized_tokens
                .insert(name.to_string(), encoded.unrecognized);
        }
        df.with_column(encoded.series)?;
        summary.encoded_columns.push(name.to_string());
    }

    match keep {
        Some(keep) => {
            let mask = BooleanChunked::from_slice(DIAGNOSIS_BIN.into(), &keep);
            df = df.filter(&mask)?;
        }
        None => {
            tracing::warn!(
                column = DIAGNOSIS,
                "Diagnosis column not found; skipping the missing-diagnosis row filter"
            );
        }
    }

    summary.output_rows = df.height();
    summary.dropped_rows = summary.input_rows - summary.output_rows;

    tracing::info!(
        input_rows = summary.input_rows,
        output_rows = summary.output_rows,
        dropped_rows = summary.dropped_rows,
        "Data preprocessing completed successfully."
    );

    Ok((df, summary))
}
