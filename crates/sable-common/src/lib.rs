//! Common types and utilities shared across the sable compiler.
//!
//! This crate provides:
//! - `Span` - byte-offset source ranges
//! - `Atom` / `ShardedInterner` - string interning for identifiers
//! - `Diagnostic` / `DiagnosticBag` - diagnostic collection and formatting

pub mod diagnostics;
pub mod interner;
pub mod span;

pub use diagnostics::{
    Diagnostic, DiagnosticBag, DiagnosticRelatedInfo, DiagnosticSeverity, codes,
    format_code_snippet, format_message,
};
pub use interner::{Atom, ShardedInterner};
pub use span::Span;
