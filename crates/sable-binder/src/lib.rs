//! Semantic binding for anonymous record creation expressions.
//!
//! This crate turns the syntactic `RecordCreation` construct into a
//! type-checked `BoundRecordCreation`. It is organized into:
//! - `context` - `BinderContext`, options, scope, and the enclosing-member
//!   description consumed by context checks
//! - `expr` - general expression binding (always produces a bound node)
//! - `name_inference` - implicit field names from expression shapes
//! - `record_creation` - the field resolver and creation orchestrator
//! - `bound` - the bound node types
//!
//! Binding is synchronous and call-scoped; the only state shared across
//! concurrent binds is the `RecordRegistry` owned by `sable-solver`.

pub mod bound;
pub mod context;
pub mod expr;
pub mod name_inference;
pub mod record_creation;

pub use bound::{
    BoundExpr, BoundRecordCreation, NullableAnnotation, PropertyDeclaration, RecordField,
};
pub use context::{BinderContext, BinderOptions, EnclosingMember, FeatureState, Scope};
pub use expr::ExpressionBinder;
pub use name_inference::infer_field_name;
pub use record_creation::RecordCreationBinder;

#[cfg(test)]
#[path = "tests/record_creation_tests.rs"]
mod record_creation_tests;
