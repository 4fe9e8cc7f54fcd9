//! Coercion error types
//!
//! Error codes:
//! - ROW_FIELD_INDEX_OUT_OF_BOUNDS (caller defect)
//! - ROW_UNSUPPORTED_FIELD_TYPE (schema defect)
//! - ROW_VALUE_TYPE_MISMATCH (data)
//! - ROW_VALUE_PARSE_FAILED (data)
//!
//! Every failure is surfaced synchronously to the caller as one of
//! these kinds; nothing is swallowed, logged, or retried internally.

use thiserror::Error;

use super::value::ValueKind;
use crate::schema::SqlType;

/// Result type for coercion operations
pub type CoerceResult<T> = Result<T, CoercionError>;

/// Failure classes distinguishing who must act on an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Caller passed an index outside the schema; abort the row operation
    CallerDefect,
    /// Schema declares a type with no coercion routine; not retryable
    SchemaDefect,
    /// Input value cannot satisfy the declared type; drop or quarantine the row
    DataDefect,
}

/// Coercion failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoercionError {
    /// Requested field index outside the declared schema
    #[error("field index {index} out of bounds for schema with {field_count} fields")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of fields the schema declares
        field_count: usize,
    },

    /// Field's declared type has no coercion routine
    #[error("declared type '{declared}' is not coercible")]
    UnsupportedType {
        /// The offending declared type
        declared: SqlType,
    },

    /// Runtime kind has no defined conversion to the target type
    #[error("cannot coerce {actual} value to {target}")]
    TypeMismatch {
        /// The declared target type
        target: SqlType,
        /// Kind of the received value
        actual: ValueKind,
    },

    /// Textual input is not a valid literal for the target type
    #[error("cannot parse {text:?} as {target}")]
    Parse {
        /// The declared target type
        target: SqlType,
        /// The offending text
        text: String,
    },
}

impl CoercionError {
    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CoercionError::IndexOutOfBounds { .. } => "ROW_FIELD_INDEX_OUT_OF_BOUNDS",
            CoercionError::UnsupportedType { .. } => "ROW_UNSUPPORTED_FIELD_TYPE",
            CoercionError::TypeMismatch { .. } => "ROW_VALUE_TYPE_MISMATCH",
            CoercionError::Parse { .. } => "ROW_VALUE_PARSE_FAILED",
        }
    }

    /// Returns the failure class for this error
    pub fn class(&self) -> FailureClass {
        match self {
            CoercionError::IndexOutOfBounds { .. } => FailureClass::CallerDefect,
            CoercionError::UnsupportedType { .. } => FailureClass::SchemaDefect,
            CoercionError::TypeMismatch { .. } | CoercionError::Parse { .. } => {
                FailureClass::DataDefect
            }
        }
    }

    /// Returns true when the failure depends on the input value.
    ///
    /// Data-dependent failures are candidates for row-level
    /// dead-lettering; the other classes abort the processing path.
    pub fn is_data_dependent(&self) -> bool {
        self.class() == FailureClass::DataDefect
    }
}
