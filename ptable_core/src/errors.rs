//! # Error Types
//!
//! Structured error types for ptable_core. Placement and dataset errors carry
//! enough context (symbol, offending value, valid range) to locate the bad
//! record in the source data without re-reading it.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::errors::{TableError, TableResult};
//!
//! fn check_period(symbol: &str, period: u8) -> TableResult<()> {
//!     if period == 0 {
//!         return Err(TableError::invalid_period(symbol, period));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_period("H", 0).unwrap_err().error_code(), "INVALID_PERIOD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ptable_core operations
pub type TableResult<T> = Result<T, TableError>;

/// Structured error type for dataset and placement operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TableError {
    /// Numeric group outside 1-18
    #[error("Invalid group for '{symbol}': {group} - groups run from 1 to 18")]
    InvalidGroup { symbol: String, group: u8 },

    /// Period outside 1-7
    #[error("Invalid period for '{symbol}': {period} - periods run from 1 to 7")]
    InvalidPeriod { symbol: String, period: u8 },

    /// Two elements were placed in the same grid cell
    #[error("Coordinate collision at row {row}, column {column}: '{first}' and '{second}'")]
    CoordinateCollision {
        row: usize,
        column: usize,
        first: String,
        second: String,
    },

    /// Symbol, name, or atomic number appears more than once in a dataset
    #[error("Duplicate element {field}: {value}")]
    DuplicateElement { field: String, value: String },

    /// A field value is invalid for some other reason
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Lookup by symbol, name, or number matched nothing
    #[error("Element not found: {query}")]
    ElementNotFound { query: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl TableError {
    /// Create an InvalidGroup error
    pub fn invalid_group(symbol: impl Into<String>, group: u8) -> Self {
        TableError::InvalidGroup {
            symbol: symbol.into(),
            group,
        }
    }

    /// Create an InvalidPeriod error
    pub fn invalid_period(symbol: impl Into<String>, period: u8) -> Self {
        TableError::InvalidPeriod {
            symbol: symbol.into(),
            period,
        }
    }

    /// Create a CoordinateCollision error
    pub fn collision(row: usize, column: usize, first: impl Into<String>, second: impl Into<String>) -> Self {
        TableError::CoordinateCollision {
            row,
            column,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a DuplicateElement error
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        TableError::DuplicateElement {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TableError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ElementNotFound error
    pub fn not_found(query: impl Into<String>) -> Self {
        TableError::ElementNotFound {
            query: query.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        TableError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the dataset contents rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            TableError::InvalidGroup { .. }
                | TableError::InvalidPeriod { .. }
                | TableError::CoordinateCollision { .. }
                | TableError::DuplicateElement { .. }
                | TableError::InvalidInput { .. }
                | TableError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::InvalidGroup { .. } => "INVALID_GROUP",
            TableError::InvalidPeriod { .. } => "INVALID_PERIOD",
            TableError::CoordinateCollision { .. } => "COORDINATE_COLLISION",
            TableError::DuplicateElement { .. } => "DUPLICATE_ELEMENT",
            TableError::InvalidInput { .. } => "INVALID_INPUT",
            TableError::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            TableError::FileError { .. } => "FILE_ERROR",
            TableError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::SerializationError {
            reason: e.to_string(),
        }
    }
}
