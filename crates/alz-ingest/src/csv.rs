//! CSV dataset loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Cell values read as missing in every column, in addition to empty cells.
///
/// The common spreadsheet and pandas export markers, so a stray `NA` does not
/// turn a numeric column into text.
pub const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how the dataset file is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Reject files larger than this many bytes.
    pub max_file_size: u64,
    /// Rows scanned for dtype inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Exact cell values treated as missing.
    pub missing_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
            infer_schema_length: None,
            missing_values: MISSING_VALUE_TOKENS.iter().map(ToString::to_string).collect(),
        }
    }
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a limit and return the size in bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reject frames with blank column names.
pub fn validate_columns(df: &DataFrame, path: &Path) -> Result<()> {
    if df
        .get_column_names()
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Loads the dataset with default options.
///
/// See [`load_dataset_with_options`].
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    load_dataset_with_options(path, &LoadOptions::default())
}

/// Loads a CSV file with a single header row into a DataFrame.
///
/// Success is logged with the row count. Any failure is logged at error
/// level and returned to the caller; there is no retry.
pub fn load_dataset_with_options(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    match read_dataset(path, options) {
        Ok(df) => {
            tracing::info!(
                path = %path.display(),
                rows = df.height(),
                columns = df.width(),
                "Dataset loaded successfully with {} rows",
                df.height()
            );
            if df.height() == 0 {
                tracing::warn!(path = %path.display(), "Dataset has a header but no rows");
            }
            Ok(df)
        }
        Err(error) => {
            tracing::error!(path = %path.display(), "Error loading data: {error}");
            Err(error)
        }
    }
}

fn read_dataset(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let size = check_file_size(path, options.max_file_size)?;
    if size == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    validate_encoding(path)?;

    let null_values = (!options.missing_values.is_empty()).then(|| {
        NullValues::AllColumns(
            options
                .missing_values
                .iter()
                .map(|token| token.as_str().into())
                .collect(),
        )
    });

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .with_parse_options(CsvParseOptions::default().with_null_values(null_values))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_columns(&df, path)?;
    Ok(df)
}
