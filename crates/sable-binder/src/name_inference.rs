//! Field name inference for anonymous record declarators.
//!
//! A declarator without an explicit name carries an implicit one only when
//! its value expression is a name-bearing shape: a bare identifier, a
//! member access, a qualified name, or a null-conditional chain that
//! bottoms out in a member binding. The inferred name is the trailing
//! identifier of the shape.
//!
//! The shape space is a closed match over `ExprKind` so that adding a new
//! expression form forces a decision here.

use sable_common::Span;
use sable_syntax::{ExprId, ExprKind, SyntaxArena};

/// Try to derive a field name from the value expression's shape.
///
/// Returns the name text and the span of the trailing identifier, or
/// `None` when the shape carries no name (callers diagnose an invalid
/// member declarator).
pub fn infer_field_name(arena: &SyntaxArena, expr: ExprId) -> Option<(String, Span)> {
    let node = arena.get(expr)?;

    match &node.kind {
        ExprKind::Ident(text) => Some((text.clone(), node.span)),

        // The trailing identifier of an access names the field; a missing
        // token from parser recovery never does.
        ExprKind::Member { name, .. }
        | ExprKind::Qualified { name, .. }
        | ExprKind::MemberBinding { name } => {
            name.is_valid().then(|| (name.text.clone(), name.span))
        }

        // The when-not-null branch bottoms out in a member binding;
        // intermediate links may themselves be conditional accesses,
        // member accesses, or qualified names.
        ExprKind::ConditionalAccess { access, .. } => infer_field_name(arena, *access),

        ExprKind::Call { .. }
        | ExprKind::Literal(_)
        | ExprKind::Binary { .. }
        | ExprKind::Paren(_) => None,
    }
}
