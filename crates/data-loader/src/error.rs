//! Error types for the data-loader crate.
//!
//! Everything that can go wrong while reading a catalog file or assembling
//! a `Catalog` from records ends up in `DataLoadError`.

use thiserror::Error;

/// Errors that can occur while loading or building a country catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} at line {line} in {file}")]
    FieldCountMismatch {
        file: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two records share the same country name
    #[error("Duplicate country in catalog: {name}")]
    DuplicateCountry { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
