//! Dataset normalization.
//!
//! Turns the raw clinical dataset into the table the hypothesis runners
//! consume:
//!
//! - `Diagnosis_bin`: numeric coercion of `Diagnosis`, rows without one dropped
//! - `Smoking_bin`, `MemoryComplaints_bin`: 0/1 encodings of the lifestyle and
//!   symptom columns
//!
//! Parsing is permissive: a malformed value becomes null instead of failing
//! the run. Only Polars failures surface as [`NormalizationError`].
//!
//! # Example
//!
//! ```ignore
//! use alz_normalization::normalize;
//!
//! let clean = normalize(&raw)?;
//! assert!(clean.height() <= raw.height());
//! ```

mod encoding;
mod error;
mod executor;

pub use encoding::{coerce_numeric, encode_binary_token};
pub use error::{NormalizationError, Result};
pub use executor::{NormalizationSummary, normalize, normalize_with_summary};
