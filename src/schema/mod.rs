//! Declared schema model for the coercion engine
//!
//! A declared schema is an ordered list of field descriptors resolved by
//! the schema layer and fixed before any row is assembled. Insertion order
//! is significant: it defines the valid field indices.
//!
//! # Design Principles
//!
//! - Descriptors are immutable once constructed
//! - Field order never changes; index `i` always names the same field
//! - The schema carries no behavior; coercion lives in [`crate::enforce`]

mod types;

pub use types::{DeclaredSchema, FieldDescriptor, SqlType};
