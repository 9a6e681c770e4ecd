use alz_model::Hypothesis;
use alz_stats::StatsError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{hypothesis}: required column '{column}' not found")]
    MissingColumn {
        hypothesis: Hypothesis,
        column: String,
    },

    #[error("{hypothesis}: {source}")]
    Stats {
        hypothesis: Hypothesis,
        #[source]
        source: StatsError,
    },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl AnalysisError {
    pub(crate) fn stats(hypothesis: Hypothesis) -> impl FnOnce(StatsError) -> Self {
        move |source| AnalysisError::Stats { hypothesis, source }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
