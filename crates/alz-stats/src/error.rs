use thiserror::Error;

/// Errors raised by the statistical tests.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("{test}: group '{group}' needs at least {required} values, found {found}")]
    InsufficientData {
        test: &'static str,
        group: String,
        required: usize,
        found: usize,
    },

    #[error("{test}: need at least {required} groups, found {found}")]
    InsufficientGroups {
        test: &'static str,
        required: usize,
        found: usize,
    },

    #[error("contingency table is empty")]
    EmptyTable,

    #[error("contingency table rows have different lengths")]
    RaggedTable,

    #[error("contingency table contains a negative or non-finite count at ({row}, {column})")]
    InvalidCount { row: usize, column: usize },

    #[error("contingency table has a zero expected frequency at ({row}, {column})")]
    ZeroExpected { row: usize, column: usize },

    #[error("distribution error: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
