//! Field type enforcer
//!
//! Coercion semantics:
//! - Dispatch on the declared type of the indexed field
//! - Each conversion routine accepts a fixed set of source kinds and
//!   rejects everything else
//! - Floating sources truncate toward zero on integer targets
//! - Int64 narrows to Int32 by two's-complement truncation (legacy rule)
//! - Boolean text parsing never fails: case-insensitive "true", else false

use super::errors::{CoerceResult, CoercionError};
use super::value::{CanonicalValue, RuntimeValue};
use crate::schema::{DeclaredSchema, SqlType};

/// Enforces declared field types on loosely-typed row values.
///
/// Construction fixes the declared schema for the enforcer's lifetime.
/// The only state is that immutable field list, so one instance may be
/// shared across threads and called concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct FieldTypeEnforcer {
    schema: DeclaredSchema,
}

impl FieldTypeEnforcer {
    /// Creates an enforcer over the given declared schema.
    ///
    /// Always succeeds; a zero-field schema is valid and every coercion
    /// against it fails the bounds check.
    pub fn new(schema: DeclaredSchema) -> Self {
        Self { schema }
    }

    /// Returns the declared schema this enforcer was built over.
    pub fn schema(&self) -> &DeclaredSchema {
        &self.schema
    }

    /// Coerces `value` to the declared type of the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoercionError` if:
    /// - `index` is outside the schema (ROW_FIELD_INDEX_OUT_OF_BOUNDS)
    /// - the declared type has no coercion routine (ROW_UNSUPPORTED_FIELD_TYPE)
    /// - the value's kind has no conversion to the target (ROW_VALUE_TYPE_MISMATCH)
    /// - textual input is not a valid literal for the target (ROW_VALUE_PARSE_FAILED)
    pub fn coerce(&self, index: usize, value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
        let field = self
            .schema
            .field(index)
            .ok_or(CoercionError::IndexOutOfBounds {
                index,
                field_count: self.schema.field_count(),
            })?;

        match field.sql_type {
            SqlType::Float64 => coerce_float64(value),
            SqlType::Int64 => coerce_int64(value),
            SqlType::Int32 => coerce_int32(value),
            SqlType::Text => coerce_text(value),
            SqlType::Boolean => coerce_boolean(value),
            declared @ (SqlType::Bytes | SqlType::Array | SqlType::Map | SqlType::Struct) => {
                Err(CoercionError::UnsupportedType { declared })
            }
        }
    }
}

fn coerce_float64(value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
    let coerced = match value {
        RuntimeValue::Float64(v) => *v,
        RuntimeValue::Int32(v) => f64::from(*v),
        RuntimeValue::Int64(v) => *v as f64,
        RuntimeValue::Float32(v) => f64::from(*v),
        RuntimeValue::Int16(v) => f64::from(*v),
        RuntimeValue::Int8(v) => f64::from(*v),
        RuntimeValue::Text(s) => parse_literal::<f64>(s, SqlType::Float64)?,
        RuntimeValue::Null
        | RuntimeValue::Boolean(_)
        | RuntimeValue::Bytes(_)
        | RuntimeValue::Array(_)
        | RuntimeValue::Struct(_) => return Err(mismatch(SqlType::Float64, value)),
    };

    Ok(CanonicalValue::Float64(coerced))
}

fn coerce_int64(value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
    let coerced = match value {
        RuntimeValue::Int64(v) => *v,
        RuntimeValue::Int32(v) => i64::from(*v),
        // Truncates toward zero, saturating at the i64 bounds.
        RuntimeValue::Float32(v) => *v as i64,
        RuntimeValue::Float64(v) => *v as i64,
        RuntimeValue::Int16(v) => i64::from(*v),
        RuntimeValue::Int8(v) => i64::from(*v),
        RuntimeValue::Text(s) => parse_literal::<i64>(s, SqlType::Int64)?,
        RuntimeValue::Null
        | RuntimeValue::Boolean(_)
        | RuntimeValue::Bytes(_)
        | RuntimeValue::Array(_)
        | RuntimeValue::Struct(_) => return Err(mismatch(SqlType::Int64, value)),
    };

    Ok(CanonicalValue::Int64(coerced))
}

fn coerce_int32(value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
    let coerced = match value {
        RuntimeValue::Int32(v) => *v,
        // Two's-complement truncation; out-of-range int64 wraps silently.
        RuntimeValue::Int64(v) => *v as i32,
        RuntimeValue::Float32(v) => *v as i32,
        RuntimeValue::Float64(v) => *v as i32,
        RuntimeValue::Int16(v) => i32::from(*v),
        RuntimeValue::Int8(v) => i32::from(*v),
        RuntimeValue::Text(s) => parse_literal::<i32>(s, SqlType::Int32)?,
        RuntimeValue::Null
        | RuntimeValue::Boolean(_)
        | RuntimeValue::Bytes(_)
        | RuntimeValue::Array(_)
        | RuntimeValue::Struct(_) => return Err(mismatch(SqlType::Int32, value)),
    };

    Ok(CanonicalValue::Int32(coerced))
}

fn coerce_text(value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
    match value {
        RuntimeValue::Text(s) => Ok(CanonicalValue::Text(s.clone())),
        RuntimeValue::Null
        | RuntimeValue::Boolean(_)
        | RuntimeValue::Int8(_)
        | RuntimeValue::Int16(_)
        | RuntimeValue::Int32(_)
        | RuntimeValue::Int64(_)
        | RuntimeValue::Float32(_)
        | RuntimeValue::Float64(_)
        | RuntimeValue::Bytes(_)
        | RuntimeValue::Array(_)
        | RuntimeValue::Struct(_) => Err(mismatch(SqlType::Text, value)),
    }
}

fn coerce_boolean(value: &RuntimeValue) -> CoerceResult<CanonicalValue> {
    match value {
        RuntimeValue::Boolean(v) => Ok(CanonicalValue::Boolean(*v)),
        // Anything other than "true" (case-insensitive) is false, never
        // an error. Legacy rule; pinned by regression tests.
        RuntimeValue::Text(s) => Ok(CanonicalValue::Boolean(s.eq_ignore_ascii_case("true"))),
        RuntimeValue::Null
        | RuntimeValue::Int8(_)
        | RuntimeValue::Int16(_)
        | RuntimeValue::Int32(_)
        | RuntimeValue::Int64(_)
        | RuntimeValue::Float32(_)
        | RuntimeValue::Float64(_)
        | RuntimeValue::Bytes(_)
        | RuntimeValue::Array(_)
        | RuntimeValue::Struct(_) => Err(mismatch(SqlType::Boolean, value)),
    }
}

/// Parses a textual literal for a numeric target.
fn parse_literal<T: std::str::FromStr>(text: &str, target: SqlType) -> CoerceResult<T> {
    text.parse().map_err(|_| CoercionError::Parse {
        target,
        text: text.to_string(),
    })
}

/// Creates a kind mismatch error for the given target.
fn mismatch(target: SqlType, value: &RuntimeValue) -> CoercionError {
    CoercionError::TypeMismatch {
        target,
        actual: value.kind(),
    }
}
