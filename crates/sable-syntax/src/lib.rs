//! Syntax tree representation consumed by the sable binder.
//!
//! The parser produces an index-addressed expression arena; downstream
//! phases refer to expressions by `ExprId` and never hold node references.
//!
//! This crate defines:
//! - `SyntaxArena` / `ExprId` / `ExprNode` - the expression store
//! - `ExprKind` - the closed set of expression shapes
//! - `NameToken`, `FieldInitializer`, `RecordCreation` - the anonymous
//!   record creation construct

mod arena;
mod display;

pub use arena::{
    BinaryOp, ExprId, ExprKind, ExprNode, FieldInitializer, LiteralKind, NameToken,
    RecordCreation, SyntaxArena,
};
pub use display::display_text;
