//! Field type enforcement subsystem
//!
//! The single point where type safety is enforced for the otherwise
//! dynamically-typed row representation. Given a field index and an
//! arbitrary runtime value, the enforcer either produces the canonical
//! in-memory value for that field's declared type or fails with a
//! distinguishable error.
//!
//! # Design Principles
//!
//! - Conversions are pure and deterministic; same input, same outcome
//! - Matches over the value union are exhaustive; a new source kind
//!   cannot compile until every routine handles it
//! - Failures are typed, never a catch-all; callers branch on kind
//! - No internal recovery, retry, or logging

mod enforcer;
mod errors;
mod value;

pub use enforcer::FieldTypeEnforcer;
pub use errors::{CoerceResult, CoercionError, FailureClass};
pub use value::{CanonicalValue, RuntimeValue, ValueKind};
