//! Shared utilities for the Alzheimer's risk analysis crates.
//!
//! This crate provides common helpers used across the workspace,
//! including Polars `AnyValue` conversions and p-value formatting.

pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use values::{
    any_to_f64, any_to_string, column_f64_values, format_numeric, format_p_value, has_column,
    is_numeric_dtype, parse_f64,
};
