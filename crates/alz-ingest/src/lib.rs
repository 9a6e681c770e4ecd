//! Dataset ingestion.
//!
//! Loads the clinical dataset (a CSV file with one header row and one row per
//! individual) into a Polars `DataFrame`. No schema is enforced here; the
//! normalizer and the hypothesis runners check for the columns they need.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use alz_ingest::load_dataset;
//!
//! let df = load_dataset(Path::new("data/alzheimers_disease_data.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    LoadOptions, MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size, load_dataset,
    load_dataset_with_options, validate_columns, validate_encoding,
};
