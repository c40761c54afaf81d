//! General expression binding.
//!
//! The expression binder computes a type for every value expression the
//! anonymous record rules can encounter. It always produces a `BoundExpr`,
//! erroneous or not, so per-field checks stay total over all initializers.
//!
//! A value that fails to bind is diagnosed once, here, at its own site;
//! consumers look at `has_errors` and stay silent instead of re-reporting.

use crate::bound::BoundExpr;
use crate::context::BinderContext;
use sable_common::codes;
use sable_solver::{TypeData, TypeId};
use sable_syntax::{ExprId, ExprKind, LiteralKind, NameToken, display_text};

/// Expression binder operating on the shared context.
pub struct ExpressionBinder<'a, 'ctx> {
    ctx: &'a mut BinderContext<'ctx>,
}

impl<'a, 'ctx> ExpressionBinder<'a, 'ctx> {
    pub fn new(ctx: &'a mut BinderContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Bind an expression for read access.
    ///
    /// Never fails: malformed input yields a node with `has_errors` set and
    /// the error type (or no type) recorded.
    pub fn bind(&mut self, expr: ExprId) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(node) = arena.get(expr) else {
            return BoundExpr {
                expr,
                type_id: None,
                has_errors: true,
            };
        };
        let span = node.span;

        match &node.kind {
            ExprKind::Literal(literal) => {
                let type_id = match literal {
                    LiteralKind::Int(_) => Some(TypeId::INT),
                    LiteralKind::Float(_) => Some(TypeId::FLOAT),
                    LiteralKind::Bool(_) => Some(TypeId::BOOL),
                    LiteralKind::Str(_) => Some(TypeId::STRING),
                    // `null` has no static type of its own.
                    LiteralKind::Null => None,
                };
                BoundExpr {
                    expr,
                    type_id,
                    has_errors: false,
                }
            }

            ExprKind::Ident(text) => {
                let atom = self.ctx.types.intern_string(text);
                match self.ctx.scope.lookup(atom) {
                    Some(type_id) => BoundExpr {
                        expr,
                        type_id: Some(type_id),
                        has_errors: false,
                    },
                    None => {
                        self.ctx.error(
                            span,
                            format!("Cannot find name '{text}'"),
                            codes::UNRESOLVED_NAME,
                        );
                        BoundExpr {
                            expr,
                            type_id: Some(TypeId::ERROR),
                            has_errors: true,
                        }
                    }
                }
            }

            ExprKind::Member { object, name } | ExprKind::Qualified {
                qualifier: object,
                name,
            } => {
                let receiver = self.bind(*object);
                self.bind_member(expr, &receiver, name)
            }

            ExprKind::ConditionalAccess { receiver, access } => {
                let receiver = self.bind(*receiver);
                let inner = self.bind_when_not_null(&receiver, *access);
                BoundExpr { expr, ..inner }
            }

            // A member binding only makes sense inside a conditional access
            // chain; standalone it has no receiver to resolve against.
            ExprKind::MemberBinding { .. } => BoundExpr {
                expr,
                type_id: Some(TypeId::ERROR),
                has_errors: true,
            },

            ExprKind::Call { callee, args } => {
                let callee_bound = self.bind(*callee);
                for &arg in args {
                    self.bind(arg);
                }
                self.bind_call(expr, &callee_bound, span)
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.bind(*left);
                let right = self.bind(*right);
                let type_id = match op {
                    sable_syntax::BinaryOp::Eq | sable_syntax::BinaryOp::Ne => Some(TypeId::BOOL),
                    _ => left.type_id.or(right.type_id),
                };
                BoundExpr {
                    expr,
                    type_id,
                    has_errors: left.has_errors || right.has_errors,
                }
            }

            ExprKind::Paren(inner) => {
                let inner = self.bind(*inner);
                BoundExpr { expr, ..inner }
            }
        }
    }

    /// Bind `receiver.name`, resolving the member on the receiver's type.
    fn bind_member(&mut self, expr: ExprId, receiver: &BoundExpr, name: &NameToken) -> BoundExpr {
        if !name.is_valid() || receiver.has_errors {
            // Missing token or broken receiver: already diagnosed upstream.
            return BoundExpr {
                expr,
                type_id: Some(TypeId::ERROR),
                has_errors: true,
            };
        }

        let atom = self.ctx.types.intern_string(&name.text);
        let member = receiver
            .type_id
            .and_then(|receiver_type| self.member_type_of(receiver_type, atom));

        match member {
            Some(type_id) => BoundExpr {
                expr,
                type_id: Some(type_id),
                has_errors: false,
            },
            None => {
                let shown = match receiver.type_id {
                    Some(receiver_type) => self.ctx.types.type_to_string(receiver_type),
                    None => display_text(self.ctx.arena, receiver.expr),
                };
                self.ctx.error(
                    name.span,
                    format!("'{}' has no member '{}'", shown, name.text),
                    codes::UNKNOWN_MEMBER,
                );
                BoundExpr {
                    expr,
                    type_id: Some(TypeId::ERROR),
                    has_errors: true,
                }
            }
        }
    }

    /// Member lookup covering both named types and anonymous records.
    fn member_type_of(&self, receiver: TypeId, name: sable_common::Atom) -> Option<TypeId> {
        if let Some(TypeData::Record(template_id)) = self.ctx.types.lookup(receiver) {
            let template = self.ctx.records.template(template_id)?;
            return template.members_named(name).next().map(|p| p.type_id);
        }
        self.ctx.types.member_type(receiver, name)
    }

    /// Bind the when-not-null branch of a conditional access against the
    /// receiver's type. Intermediate links may be further conditional
    /// accesses, member accesses, or qualified names.
    fn bind_when_not_null(&mut self, receiver: &BoundExpr, access: ExprId) -> BoundExpr {
        let arena = self.ctx.arena;
        let Some(node) = arena.get(access) else {
            return BoundExpr {
                expr: access,
                type_id: None,
                has_errors: true,
            };
        };

        match &node.kind {
            ExprKind::MemberBinding { name } => self.bind_member(access, receiver, name),
            ExprKind::Member { object, name } | ExprKind::Qualified {
                qualifier: object,
                name,
            } => {
                let inner = self.bind_when_not_null(receiver, *object);
                self.bind_member(access, &inner, name)
            }
            ExprKind::ConditionalAccess {
                receiver: inner_receiver,
                access: inner_access,
            } => {
                let inner = self.bind_when_not_null(receiver, *inner_receiver);
                self.bind_when_not_null(&inner, *inner_access)
            }
            _ => self.bind(access),
        }
    }

    fn bind_call(&mut self, expr: ExprId, callee: &BoundExpr, span: sable_common::Span) -> BoundExpr {
        if callee.has_errors {
            return BoundExpr {
                expr,
                type_id: Some(TypeId::ERROR),
                has_errors: true,
            };
        }

        let shape = callee.type_id.and_then(|callee_type| {
            match self.ctx.types.lookup(callee_type) {
                Some(TypeData::Function(shape_id)) => self.ctx.types.function_shape(shape_id),
                _ => None,
            }
        });

        match shape {
            Some(shape) => BoundExpr {
                expr,
                type_id: Some(shape.return_type),
                has_errors: false,
            },
            None => {
                let shown = display_text(self.ctx.arena, callee.expr);
                self.ctx.error(
                    span,
                    format!("'{shown}' is not callable"),
                    codes::NOT_CALLABLE,
                );
                BoundExpr {
                    expr,
                    type_id: Some(TypeId::ERROR),
                    has_errors: true,
                }
            }
        }
    }
}
