// src/error.rs

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use thiserror::Error;

/// Errors raised by the query stages.
///
/// Malformed numbers and empty results never show up here: the former
/// become missing values during coercion, the latter are empty tables.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A stage was asked for a field the table schema does not have.
    #[error("column `{0}` not found in table schema")]
    MissingColumn(String),

    /// The field exists but holds the wrong kind of data for this stage.
    #[error("column `{column}` is {actual}, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: DataType,
    },

    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

pub type Result<T, E = QueryError> = std::result::Result<T, E>;
