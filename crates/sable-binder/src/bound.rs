//! Bound (type-checked) nodes produced by the binder.

use sable_common::{Atom, Span};
use sable_solver::{RecordCtor, RecordTemplate, TypeId, TypeInterner};
use sable_syntax::ExprId;
use std::sync::Arc;

/// Tri-state nullability marker for a reference-typed value.
///
/// `Unknown` means the nullable-references feature state was indeterminate
/// when the value was bound; it is deliberately distinct from
/// `NotAnnotated` (feature known to be off, or a non-reference type).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NullableAnnotation {
    Annotated,
    NotAnnotated,
    Unknown,
}

/// A type-checked value expression.
///
/// Binding always produces a node, even for malformed input; `has_errors`
/// suppresses cascading diagnostics downstream. `type_id` is `None` when
/// the expression has no static type at all (for example a bare `null`
/// literal).
#[derive(Clone, Debug)]
pub struct BoundExpr {
    pub expr: ExprId,
    pub type_id: Option<TypeId>,
    pub has_errors: bool,
}

/// A synthesized field of a bound record creation.
///
/// Exactly one `RecordField` exists per source initializer, at the same
/// index, under all error conditions. `name` is `None` only on error paths;
/// output-facing consumers go through `BoundRecordCreation::field_name`,
/// which substitutes the positional placeholder.
#[derive(Clone, Debug)]
pub struct RecordField {
    pub name: Option<Atom>,
    pub span: Span,
    pub type_id: TypeId,
    pub nullability: NullableAnnotation,
}

/// Semantic-navigation record for an initializer that declared its property
/// with an explicit, valid, unique name token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub name: Atom,
    /// Span of the explicit name token.
    pub span: Span,
    /// Index of the declared property on the record template.
    pub property_index: usize,
}

/// A fully bound anonymous record creation expression.
#[derive(Debug)]
pub struct BoundRecordCreation {
    /// Span of the whole creation expression.
    pub span: Span,
    /// The interned (possibly shared) record template.
    pub template: Arc<RecordTemplate>,
    /// The `TypeId` backing the template, for use as the expression's type.
    pub record_type: TypeId,
    /// Bound value expressions, one per initializer in declaration order.
    pub arguments: Vec<BoundExpr>,
    /// One entry per initializer with an explicit, valid, unique name.
    pub declarations: Vec<PropertyDeclaration>,
    /// One descriptor per initializer, same index, always.
    pub fields: Vec<RecordField>,
    /// OR of every error raised while binding this creation.
    pub has_errors: bool,
}

impl BoundRecordCreation {
    /// The synthesized instance constructor of the record type.
    pub fn ctor(&self) -> &RecordCtor {
        &self.template.ctor
    }

    /// Display name of field `index`: the resolved name, or the positional
    /// placeholder `$<index>` when no valid name exists.
    pub fn field_name(&self, index: usize, types: &TypeInterner) -> String {
        match self.fields.get(index).and_then(|f| f.name) {
            Some(atom) => types.resolve_atom(atom).to_string(),
            None => format!("${index}"),
        }
    }
}
