use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while building the normalized frame.
///
/// Malformed cell values never produce an error; they become nulls.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
