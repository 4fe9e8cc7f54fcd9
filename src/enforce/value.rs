//! Runtime and canonical value unions
//!
//! [`RuntimeValue`] is the loosely-typed input union produced by upstream
//! decoders; [`CanonicalValue`] is the exact-typed output union the rest
//! of the engine stores, compares, and emits. A runtime value is borrowed
//! for the duration of one coercion call; a canonical value is produced
//! fresh and owned by the caller.

use std::fmt;

use crate::schema::SqlType;

/// Kind tag for a runtime value, used in error reporting.
///
/// Kept separate from [`RuntimeValue`] so errors stay `Copy`-cheap and
/// matches over kinds are compiler-checked for exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Absent value
    Null,
    /// Boolean
    Boolean,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// UTF-8 string
    Text,
    /// Opaque byte sequence
    Bytes,
    /// Ordered list of values
    Array,
    /// Named nested fields
    Struct,
}

impl ValueKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Int8 => "int8",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Array => "array",
            ValueKind::Struct => "struct",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// A loosely-typed value as received from an upstream source.
///
/// The union is bounded but wider than what any single target type
/// accepts: `Null`, `Bytes`, `Array`, and `Struct` have no conversion
/// routine and are rejected by every target.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// Absent value; rejected by every target
    Null,
    /// Boolean
    Boolean(bool),
    /// 8-bit signed integer
    Int8(i8),
    /// 16-bit signed integer
    Int16(i16),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 32-bit floating point
    Float32(f32),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    Text(String),
    /// Opaque byte sequence
    Bytes(Vec<u8>),
    /// Ordered list of values
    Array(Vec<RuntimeValue>),
    /// Named nested fields, entry order preserved
    Struct(Vec<(String, RuntimeValue)>),
}

impl RuntimeValue {
    /// Returns the kind tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            RuntimeValue::Null => ValueKind::Null,
            RuntimeValue::Boolean(_) => ValueKind::Boolean,
            RuntimeValue::Int8(_) => ValueKind::Int8,
            RuntimeValue::Int16(_) => ValueKind::Int16,
            RuntimeValue::Int32(_) => ValueKind::Int32,
            RuntimeValue::Int64(_) => ValueKind::Int64,
            RuntimeValue::Float32(_) => ValueKind::Float32,
            RuntimeValue::Float64(_) => ValueKind::Float64,
            RuntimeValue::Text(_) => ValueKind::Text,
            RuntimeValue::Bytes(_) => ValueKind::Bytes,
            RuntimeValue::Array(_) => ValueKind::Array,
            RuntimeValue::Struct(_) => ValueKind::Struct,
        }
    }
}

impl From<bool> for RuntimeValue {
    fn from(v: bool) -> Self {
        RuntimeValue::Boolean(v)
    }
}

impl From<i8> for RuntimeValue {
    fn from(v: i8) -> Self {
        RuntimeValue::Int8(v)
    }
}

impl From<i16> for RuntimeValue {
    fn from(v: i16) -> Self {
        RuntimeValue::Int16(v)
    }
}

impl From<i32> for RuntimeValue {
    fn from(v: i32) -> Self {
        RuntimeValue::Int32(v)
    }
}

impl From<i64> for RuntimeValue {
    fn from(v: i64) -> Self {
        RuntimeValue::Int64(v)
    }
}

impl From<f32> for RuntimeValue {
    fn from(v: f32) -> Self {
        RuntimeValue::Float32(v)
    }
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        RuntimeValue::Float64(v)
    }
}

impl From<&str> for RuntimeValue {
    fn from(v: &str) -> Self {
        RuntimeValue::Text(v.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(v: String) -> Self {
        RuntimeValue::Text(v)
    }
}

/// Maps a decoded JSON document value into the runtime union.
///
/// Numbers representable as `i64` arrive as `Int64`; everything else
/// numeric arrives as `Float64`, matching how upstream JSON decoders
/// widen. Object entries follow the decoded map's iteration order.
impl From<serde_json::Value> for RuntimeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RuntimeValue::Null,
            serde_json::Value::Bool(b) => RuntimeValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => RuntimeValue::Int64(i),
                None => RuntimeValue::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => RuntimeValue::Text(s),
            serde_json::Value::Array(items) => {
                RuntimeValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                RuntimeValue::Struct(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// The exact-typed in-memory value required downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// 64-bit floating point
    Float64(f64),
    /// 64-bit signed integer
    Int64(i64),
    /// 32-bit signed integer
    Int32(i32),
    /// UTF-8 string
    Text(String),
    /// Boolean
    Boolean(bool),
}

impl CanonicalValue {
    /// Returns the declared type this value canonicalizes.
    pub fn sql_type(&self) -> SqlType {
        match self {
            CanonicalValue::Float64(_) => SqlType::Float64,
            CanonicalValue::Int64(_) => SqlType::Int64,
            CanonicalValue::Int32(_) => SqlType::Int32,
            CanonicalValue::Text(_) => SqlType::Text,
            CanonicalValue::Boolean(_) => SqlType::Boolean,
        }
    }

    /// Returns the float64 payload, if this is a Float64 value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CanonicalValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the int64 payload, if this is an Int64 value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CanonicalValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the int32 payload, if this is an Int32 value.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            CanonicalValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CanonicalValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CanonicalValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Float64(v) => write!(f, "{}", v),
            CanonicalValue::Int64(v) => write!(f, "{}", v),
            CanonicalValue::Int32(v) => write!(f, "{}", v),
            CanonicalValue::Text(s) => write!(f, "{}", s),
            CanonicalValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags() {
        assert_eq!(RuntimeValue::Null.kind(), ValueKind::Null);
        assert_eq!(RuntimeValue::from(true).kind(), ValueKind::Boolean);
        assert_eq!(RuntimeValue::from(1i8).kind(), ValueKind::Int8);
        assert_eq!(RuntimeValue::from(1i16).kind(), ValueKind::Int16);
        assert_eq!(RuntimeValue::from(1i32).kind(), ValueKind::Int32);
        assert_eq!(RuntimeValue::from(1i64).kind(), ValueKind::Int64);
        assert_eq!(RuntimeValue::from(1.0f32).kind(), ValueKind::Float32);
        assert_eq!(RuntimeValue::from(1.0f64).kind(), ValueKind::Float64);
        assert_eq!(RuntimeValue::from("x").kind(), ValueKind::Text);
        assert_eq!(RuntimeValue::Bytes(vec![0]).kind(), ValueKind::Bytes);
    }

    #[test]
    fn test_kind_names_are_lowercase() {
        assert_eq!(ValueKind::Float64.kind_name(), "float64");
        assert_eq!(ValueKind::Struct.kind_name(), "struct");
        assert_eq!(format!("{}", ValueKind::Int8), "int8");
    }

    #[test]
    fn test_json_scalars_map_to_runtime_kinds() {
        assert_eq!(RuntimeValue::from(json!(null)), RuntimeValue::Null);
        assert_eq!(RuntimeValue::from(json!(true)), RuntimeValue::Boolean(true));
        assert_eq!(RuntimeValue::from(json!(42)), RuntimeValue::Int64(42));
        assert_eq!(RuntimeValue::from(json!(3.5)), RuntimeValue::Float64(3.5));
        assert_eq!(
            RuntimeValue::from(json!("hello")),
            RuntimeValue::Text("hello".into())
        );
    }

    #[test]
    fn test_json_integral_numbers_arrive_as_int64() {
        // JSON decoders widen; only non-integral numbers become floats.
        assert_eq!(RuntimeValue::from(json!(0)), RuntimeValue::Int64(0));
        assert_eq!(
            RuntimeValue::from(json!(i64::MAX)),
            RuntimeValue::Int64(i64::MAX)
        );
    }

    #[test]
    fn test_json_nested_values() {
        let value = RuntimeValue::from(json!({"a": 1, "b": [true, "x"]}));

        let RuntimeValue::Struct(entries) = value else {
            panic!("expected struct");
        };
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[0].1, RuntimeValue::Int64(1));
        assert_eq!(
            entries[1].1,
            RuntimeValue::Array(vec![
                RuntimeValue::Boolean(true),
                RuntimeValue::Text("x".into())
            ])
        );
    }

    #[test]
    fn test_canonical_accessors() {
        assert_eq!(CanonicalValue::Float64(1.5).as_f64(), Some(1.5));
        assert_eq!(CanonicalValue::Int64(7).as_i64(), Some(7));
        assert_eq!(CanonicalValue::Int32(7).as_i32(), Some(7));
        assert_eq!(CanonicalValue::Text("x".into()).as_text(), Some("x"));
        assert_eq!(CanonicalValue::Boolean(true).as_bool(), Some(true));

        assert_eq!(CanonicalValue::Int64(7).as_i32(), None);
        assert_eq!(CanonicalValue::Text("7".into()).as_i64(), None);
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(format!("{}", CanonicalValue::Int64(42)), "42");
        assert_eq!(format!("{}", CanonicalValue::Text("x".into())), "x");
        assert_eq!(format!("{}", CanonicalValue::Boolean(true)), "true");
    }

    #[test]
    fn test_canonical_sql_type() {
        assert_eq!(CanonicalValue::Float64(0.0).sql_type(), SqlType::Float64);
        assert_eq!(CanonicalValue::Int64(0).sql_type(), SqlType::Int64);
        assert_eq!(CanonicalValue::Int32(0).sql_type(), SqlType::Int32);
        assert_eq!(CanonicalValue::Text(String::new()).sql_type(), SqlType::Text);
        assert_eq!(CanonicalValue::Boolean(false).sql_type(), SqlType::Boolean);
    }
}
