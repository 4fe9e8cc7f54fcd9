//! Declared schema type definitions
//!
//! Coercible column types:
//! - float64: 64-bit floating point
//! - int64: 64-bit signed integer
//! - int32: 32-bit signed integer
//! - text: UTF-8 string
//! - boolean: Boolean
//!
//! The schema language also declares bytes, array, map, and struct
//! columns. Those have no coercion routine; requesting one at
//! enforcement time is a schema defect, not a data error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared column types, as resolved by the schema layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    /// 64-bit floating point
    Float64,
    /// 64-bit signed integer
    Int64,
    /// 32-bit signed integer
    Int32,
    /// UTF-8 string
    Text,
    /// Boolean
    Boolean,
    /// Opaque byte sequence (declared only; not coercible)
    Bytes,
    /// Homogeneous array (declared only; not coercible)
    Array,
    /// Key/value map (declared only; not coercible)
    Map,
    /// Nested structure (declared only; not coercible)
    Struct,
}

impl SqlType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlType::Float64 => "float64",
            SqlType::Int64 => "int64",
            SqlType::Int32 => "int32",
            SqlType::Text => "text",
            SqlType::Boolean => "boolean",
            SqlType::Bytes => "bytes",
            SqlType::Array => "array",
            SqlType::Map => "map",
            SqlType::Struct => "struct",
        }
    }

    /// Returns true for the types the enforcer can coerce to.
    pub fn is_coercible(&self) -> bool {
        matches!(
            self,
            SqlType::Float64 | SqlType::Int64 | SqlType::Int32 | SqlType::Text | SqlType::Boolean
        )
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// One field position in a declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as resolved by the schema layer
    pub name: String,
    /// Declared column type
    pub sql_type: SqlType,
}

impl FieldDescriptor {
    /// Creates a descriptor with the given name and declared type.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }

    /// Create a float64 field
    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Float64)
    }

    /// Create an int64 field
    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Int64)
    }

    /// Create an int32 field
    pub fn int32(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Int32)
    }

    /// Create a text field
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Text)
    }

    /// Create a boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Boolean)
    }
}

/// Ordered field descriptors defining a row's shape.
///
/// Field order is the positional layout of the row; index `i` in every
/// row refers to descriptor `i` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredSchema {
    fields: Vec<FieldDescriptor>,
}

impl DeclaredSchema {
    /// Creates a schema from ordered descriptors.
    ///
    /// A zero-field schema is valid; every coercion against it fails
    /// the bounds check.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Creates a schema from ordered `(name, type)` pairs.
    pub fn from_pairs<N: Into<String>>(pairs: Vec<(N, SqlType)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, sql_type)| FieldDescriptor::new(name, sql_type))
                .collect(),
        )
    }

    /// Returns the descriptor at `index`, or `None` if out of bounds.
    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Returns the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> DeclaredSchema {
        DeclaredSchema::new(vec![
            FieldDescriptor::text("id"),
            FieldDescriptor::int64("ts"),
            FieldDescriptor::float64("amount"),
            FieldDescriptor::boolean("valid"),
        ])
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SqlType::Float64.type_name(), "float64");
        assert_eq!(SqlType::Int64.type_name(), "int64");
        assert_eq!(SqlType::Int32.type_name(), "int32");
        assert_eq!(SqlType::Text.type_name(), "text");
        assert_eq!(SqlType::Boolean.type_name(), "boolean");
        assert_eq!(SqlType::Struct.type_name(), "struct");
    }

    #[test]
    fn test_coercible_types() {
        assert!(SqlType::Float64.is_coercible());
        assert!(SqlType::Int64.is_coercible());
        assert!(SqlType::Int32.is_coercible());
        assert!(SqlType::Text.is_coercible());
        assert!(SqlType::Boolean.is_coercible());

        assert!(!SqlType::Bytes.is_coercible());
        assert!(!SqlType::Array.is_coercible());
        assert!(!SqlType::Map.is_coercible());
        assert!(!SqlType::Struct.is_coercible());
    }

    #[test]
    fn test_field_lookup_preserves_order() {
        let schema = sample_schema();

        assert_eq!(schema.field_count(), 4);
        assert_eq!(schema.field(0).unwrap().name, "id");
        assert_eq!(schema.field(1).unwrap().sql_type, SqlType::Int64);
        assert_eq!(schema.field(3).unwrap().name, "valid");
        assert!(schema.field(4).is_none());
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "ts", "amount", "valid"]);
    }

    #[test]
    fn test_empty_schema_is_constructible() {
        let schema = DeclaredSchema::new(Vec::new());
        assert!(schema.is_empty());
        assert_eq!(schema.field_count(), 0);
        assert!(schema.field(0).is_none());
    }

    #[test]
    fn test_from_pairs() {
        let schema = DeclaredSchema::from_pairs(vec![
            ("id", SqlType::Text),
            ("count", SqlType::Int32),
        ]);

        assert_eq!(schema.field_count(), 2);
        assert_eq!(schema.field(1).unwrap().sql_type, SqlType::Int32);
    }

    #[test]
    fn test_sql_type_serializes_lowercase() {
        let json = serde_json::to_value(SqlType::Float64).unwrap();
        assert_eq!(json, serde_json::json!("float64"));

        let back: SqlType = serde_json::from_value(json).unwrap();
        assert_eq!(back, SqlType::Float64);
    }
}
