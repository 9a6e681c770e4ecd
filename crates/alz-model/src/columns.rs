//! Dataset column names and the binary lookup table.
//!
//! Only the columns the pipeline reads or derives are named here; any other
//! column in the source file passes through untouched.

/// Raw diagnosis indicator (numeric or numeric-like).
pub const DIAGNOSIS: &str = "Diagnosis";
/// Numeric coercion of [`DIAGNOSIS`]; rows where it is missing are dropped.
pub const DIAGNOSIS_BIN: &str = "Diagnosis_bin";
pub const SMOKING: &str = "Smoking";
pub const SMOKING_BIN: &str = "Smoking_bin";
pub const MEMORY_COMPLAINTS: &str = "MemoryComplaints";
pub const MEMORY_COMPLAINTS_BIN: &str = "MemoryComplaints_bin";
pub const EDUCATION_LEVEL: &str = "EducationLevel";
pub const PHYSICAL_ACTIVITY: &str = "PhysicalActivity";
pub const MMSE: &str = "MMSE";
pub const SLEEP_QUALITY: &str = "SleepQuality";

/// Lifestyle and symptom columns that get a binary `_bin` companion.
pub const BINARY_COLUMNS: [&str; 2] = [SMOKING, MEMORY_COMPLAINTS];

/// Text tokens accepted by the binary encoder, after lower-casing and trimming.
pub const BINARY_MAP: [(&str, i32); 6] = [
    ("yes", 1),
    ("no", 0),
    ("true", 1),
    ("false", 0),
    ("1", 1),
    ("0", 0),
];

/// Name of the derived binary column for a source column.
pub fn bin_column(name: &str) -> String {
    format!("{name}_bin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_column_names_match_constants() {
        assert_eq!(bin_column(DIAGNOSIS), DIAGNOSIS_BIN);
        assert_eq!(bin_column(SMOKING), SMOKING_BIN);
        assert_eq!(bin_column(MEMORY_COMPLAINTS), MEMORY_COMPLAINTS_BIN);
    }

    #[test]
    fn binary_map_is_lowercase() {
        for (token, value) in BINARY_MAP {
            assert_eq!(token, token.to_lowercase());
            assert!(value == 0 || value == 1);
        }
    }
}
