//! Index-addressed expression arena.
//!
//! Expressions are stored in a flat `Vec` and referenced by `ExprId`.
//! Nodes are immutable once allocated; the parser appends, everyone else
//! reads.

use sable_common::Span;

/// Index of an expression node in a `SyntaxArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

/// An identifier token, possibly synthesized as missing during parser error
/// recovery. A missing token never yields a usable name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameToken {
    pub text: String,
    pub span: Span,
    pub missing: bool,
}

impl NameToken {
    /// A real identifier token scanned from source.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        NameToken {
            text: text.into(),
            span,
            missing: false,
        }
    }

    /// A missing token inserted by error recovery.
    pub fn missing(span: Span) -> Self {
        NameToken {
            text: String::new(),
            span,
            missing: true,
        }
    }

    /// Check if this token carries a usable identifier.
    pub fn is_valid(&self) -> bool {
        !self.missing && !self.text.is_empty()
    }
}

/// Literal expression payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralKind {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// The `null` literal. It has no static type of its own.
    Null,
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
}

impl BinaryOp {
    /// Source text of the operator, for display.
    pub fn text(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }
}

/// The closed set of expression shapes the binder understands.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// A bare identifier reference: `x`
    Ident(String),
    /// A member access through a value: `expr.name`
    Member { object: ExprId, name: NameToken },
    /// A namespace- or type-qualified name: `A.B` (qualifier is itself an
    /// identifier or another qualified name)
    Qualified { qualifier: ExprId, name: NameToken },
    /// A null-conditional access: `receiver?.access`
    ConditionalAccess { receiver: ExprId, access: ExprId },
    /// The member bound inside a conditional access chain: the `.name` in
    /// `receiver?.name`
    MemberBinding { name: NameToken },
    /// A call: `callee(args...)`
    Call { callee: ExprId, args: Vec<ExprId> },
    /// A literal value
    Literal(LiteralKind),
    /// A binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// A parenthesized expression: `(inner)`
    Paren(ExprId),
}

/// An expression node with its source span.
#[derive(Clone, Debug)]
pub struct ExprNode {
    pub kind: ExprKind,
    pub span: Span,
}

/// A single `name = expression` (or bare expression) entry inside an
/// anonymous record creation.
#[derive(Clone, Debug)]
pub struct FieldInitializer {
    /// Explicit name token, if the declarator had one.
    pub name: Option<NameToken>,
    /// The value expression.
    pub value: ExprId,
    /// Span of the whole declarator.
    pub span: Span,
}

/// An anonymous record creation expression: `new { a = 1, b.c, ... }`.
#[derive(Clone, Debug)]
pub struct RecordCreation {
    pub initializers: Vec<FieldInitializer>,
    pub span: Span,
}

/// Flat expression store. Nodes are appended by the parser and referenced
/// by `ExprId` everywhere else.
#[derive(Debug, Default)]
pub struct SyntaxArena {
    exprs: Vec<ExprNode>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        SyntaxArena::default()
    }

    /// Allocate a node, returning its id.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(ExprNode { kind, span });
        id
    }

    /// Get a node by id.
    pub fn get(&self, id: ExprId) -> Option<&ExprNode> {
        self.exprs.get(id.0 as usize)
    }

    /// Span of a node; empty span for an invalid id.
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).map(|n| n.span).unwrap_or_default()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // Allocation helpers in the shape the parser emits them.

    pub fn ident(&mut self, text: impl Into<String>, span: Span) -> ExprId {
        self.alloc(ExprKind::Ident(text.into()), span)
    }

    pub fn member(&mut self, object: ExprId, name: NameToken, span: Span) -> ExprId {
        self.alloc(ExprKind::Member { object, name }, span)
    }

    pub fn qualified(&mut self, qualifier: ExprId, name: NameToken, span: Span) -> ExprId {
        self.alloc(ExprKind::Qualified { qualifier, name }, span)
    }

    pub fn conditional_access(&mut self, receiver: ExprId, access: ExprId, span: Span) -> ExprId {
        self.alloc(ExprKind::ConditionalAccess { receiver, access }, span)
    }

    pub fn member_binding(&mut self, name: NameToken, span: Span) -> ExprId {
        self.alloc(ExprKind::MemberBinding { name }, span)
    }

    pub fn call(&mut self, callee: ExprId, args: Vec<ExprId>, span: Span) -> ExprId {
        self.alloc(ExprKind::Call { callee, args }, span)
    }

    pub fn literal(&mut self, literal: LiteralKind, span: Span) -> ExprId {
        self.alloc(ExprKind::Literal(literal), span)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, span: Span) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }

    pub fn paren(&mut self, inner: ExprId, span: Span) -> ExprId {
        self.alloc(ExprKind::Paren(inner), span)
    }
}
