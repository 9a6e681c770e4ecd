use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create chart directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw chart {path}: {message}")]
    Draw { path: PathBuf, message: String },

    #[error("chart '{title}' has nothing to plot")]
    NoData { title: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
