//! rowcast - schema-driven row value coercion for a streaming query engine
//!
//! Rows flow through the engine as positional sequences of loosely-typed
//! values produced by heterogeneous upstream decoders (JSON, Avro, Connect
//! records). Before a value is stored, compared, or emitted downstream it
//! must be coerced to the exact declared type of its schema field. This
//! crate is that single enforcement point.

pub mod enforce;
pub mod schema;

pub use enforce::{
    CanonicalValue, CoerceResult, CoercionError, FailureClass, FieldTypeEnforcer, RuntimeValue,
    ValueKind,
};
pub use schema::{DeclaredSchema, FieldDescriptor, SqlType};
