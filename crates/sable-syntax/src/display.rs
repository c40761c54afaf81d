//! Source-shaped display text for expressions.
//!
//! Diagnostics quote the expression when no type name is available (for
//! example a `null` literal used as a record property value). The rendering
//! reconstructs a compact source form from the arena, not the original
//! text.

use crate::arena::{ExprId, ExprKind, LiteralKind, SyntaxArena};

/// Render a compact, source-shaped form of the expression for diagnostics.
pub fn display_text(arena: &SyntaxArena, id: ExprId) -> String {
    let Some(node) = arena.get(id) else {
        return "<missing>".to_string();
    };

    match &node.kind {
        ExprKind::Ident(text) => text.clone(),
        ExprKind::Member { object, name } => {
            format!("{}.{}", display_text(arena, *object), name.text)
        }
        ExprKind::Qualified { qualifier, name } => {
            format!("{}.{}", display_text(arena, *qualifier), name.text)
        }
        ExprKind::ConditionalAccess { receiver, access } => {
            format!("{}?{}", display_text(arena, *receiver), display_text(arena, *access))
        }
        ExprKind::MemberBinding { name } => format!(".{}", name.text),
        ExprKind::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(|&a| display_text(arena, a)).collect();
            format!("{}({})", display_text(arena, *callee), args.join(", "))
        }
        ExprKind::Literal(literal) => match literal {
            LiteralKind::Int(v) => v.to_string(),
            LiteralKind::Float(v) => v.to_string(),
            LiteralKind::Bool(v) => v.to_string(),
            LiteralKind::Str(v) => format!("\"{v}\""),
            LiteralKind::Null => "null".to_string(),
        },
        ExprKind::Binary { op, left, right } => format!(
            "{} {} {}",
            display_text(arena, *left),
            op.text(),
            display_text(arena, *right)
        ),
        ExprKind::Paren(inner) => format!("({})", display_text(arena, *inner)),
    }
}
