//! Structural type table for the sable compiler.
//!
//! This crate provides:
//!
//! - **`TypeInterner`**: structural type interning with O(1) equality via
//!   `TypeId` comparison, plus category flags used by binding rules
//! - **`RecordRegistry`**: the compilation-wide intern table for anonymous
//!   record templates, keyed by ordered (name, type) field sequences
//!
//! Both services are thread-safe; the surrounding compiler binds many
//! expressions concurrently against one shared instance of each.

mod intern;
mod record;
mod types;

pub use intern::TypeInterner;
pub use record::{
    RecordCtor, RecordCtorParam, RecordFieldKey, RecordProperty, RecordRegistry, RecordTemplate,
};
pub use types::{
    FunctionShape, FunctionShapeId, MemberInfo, NamedKind, NamedShape, RecordTemplateId, ShapeId,
    TypeData, TypeFlags, TypeId,
};

#[cfg(test)]
#[path = "tests/concurrent_tests.rs"]
mod concurrent_tests;
