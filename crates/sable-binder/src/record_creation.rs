//! Anonymous record creation binding.
//!
//! This module resolves a `RecordCreation` expression into a
//! `BoundRecordCreation`:
//! - field names are taken from explicit tokens or inferred from the value
//!   expression's shape
//! - names must be unique within one creation expression
//! - value expressions are always bound, even for malformed declarators
//! - field types are validated (void, unsafe, and restricted types cannot
//!   back a record property)
//! - the ordered field sequence is interned through the shared
//!   `RecordRegistry`
//!
//! Error recovery never drops or reorders fields: the output carries one
//! descriptor per source initializer at the same index, so symbol lookup
//! and IDE queries stay stable under partial failure.

use crate::bound::{BoundExpr, BoundRecordCreation, NullableAnnotation, PropertyDeclaration, RecordField};
use crate::context::{BinderContext, FeatureState};
use crate::expr::ExpressionBinder;
use crate::name_inference::infer_field_name;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use sable_common::{Atom, Span, codes, format_message};
use sable_solver::{RecordFieldKey, RecordTemplate, TypeFlags, TypeId};
use sable_syntax::{FieldInitializer, RecordCreation};
use smallvec::SmallVec;
use std::sync::Arc;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Binds anonymous record creation expressions against the shared context.
pub struct RecordCreationBinder<'a, 'ctx> {
    ctx: &'a mut BinderContext<'ctx>,
}

impl<'a, 'ctx> RecordCreationBinder<'a, 'ctx> {
    pub fn new(ctx: &'a mut BinderContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Bind a creation expression to a fully resolved node.
    ///
    /// Binding never aborts: every diagnostic is recoverable and the
    /// returned node is usable by downstream passes with `has_errors`
    /// marking the degraded parts.
    pub fn bind_creation(&mut self, creation: &RecordCreation) -> BoundRecordCreation {
        let count = creation.initializers.len();
        let mut fields: Vec<RecordField> = Vec::with_capacity(count);
        let mut arguments: Vec<BoundExpr> = Vec::with_capacity(count);
        // Ordered, scoped to this creation expression only.
        let mut seen: FxIndexSet<Atom> = FxIndexSet::default();
        let mut has_errors = false;

        for initializer in &creation.initializers {
            let (field, value) = self.resolve_field(initializer, &mut seen, &mut has_errors);
            fields.push(field);
            arguments.push(value);
        }
        // One descriptor per initializer, same index, under all error paths.
        debug_assert_eq!(fields.len(), count);

        let keys: SmallVec<[RecordFieldKey; 8]> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| RecordFieldKey {
                name: self.field_key_name(field.name, index),
                type_id: field.type_id,
            })
            .collect();
        let template = self.ctx.records.intern(&keys, creation.span);
        let record_type = self.ctx.types.record_type(template.id);

        let declarations = self.explicit_declarations(creation, &fields, &template);

        if !self.check_creation_context(creation.span) {
            has_errors = true;
        }

        tracing::trace!(
            fields = count,
            template = template.id.0,
            has_errors,
            "bound anonymous record creation"
        );

        BoundRecordCreation {
            span: creation.span,
            template,
            record_type,
            arguments,
            declarations,
            fields,
            has_errors,
        }
    }

    /// Resolve one initializer to its field descriptor and bound value.
    fn resolve_field(
        &mut self,
        initializer: &FieldInitializer,
        seen: &mut FxIndexSet<Atom>,
        has_errors: &mut bool,
    ) -> (RecordField, BoundExpr) {
        let mut field_error = false;

        // Determine the field name: explicit token if present, else derive
        // it from the value expression's shape.
        let resolved_name: Option<(String, Span)> = match &initializer.name {
            Some(token) if token.is_valid() => Some((token.text.clone(), token.span)),
            // A token synthesized by parser recovery was diagnosed at parse
            // time; the field just loses its name here.
            Some(_) => {
                field_error = true;
                None
            }
            None => {
                let inferred = infer_field_name(self.ctx.arena, initializer.value);
                if inferred.is_none() {
                    let value_span = self.ctx.arena.span(initializer.value);
                    self.ctx.error(
                        value_span,
                        "Invalid anonymous record member declarator. Members must be \
                         declared with a name assignment, simple name, or member access",
                        codes::INVALID_MEMBER_DECLARATOR,
                    );
                    field_error = true;
                }
                inferred
            }
        };

        // Bind the value even when the declarator is malformed so the
        // type-checking pass stays total over all initializers.
        let value = ExpressionBinder::new(self.ctx).bind(initializer.value);

        // Enforce per-creation name uniqueness. The first occurrence keeps
        // the name; later ones lose it but keep their computed type.
        let name = match resolved_name {
            Some((text, name_span)) => {
                let atom = self.ctx.types.intern_string(&text);
                if seen.insert(atom) {
                    Some(atom)
                } else {
                    self.ctx.error(
                        name_span,
                        format!(
                            "An anonymous record cannot have multiple properties \
                             with the same name '{text}'"
                        ),
                        codes::DUPLICATE_PROPERTY_NAME,
                    );
                    field_error = true;
                    None
                }
            }
            None => None,
        };

        let (type_id, type_error) = self.validate_field_type(&value);
        field_error |= type_error;

        let nullability = self.annotation_for(type_id);

        *has_errors |= field_error;
        (
            RecordField {
                name,
                span: initializer.span,
                type_id,
                nullability,
            },
            value,
        )
    }

    /// Decide the type recorded for a field, substituting the error type
    /// where the value cannot back a property.
    fn validate_field_type(&mut self, value: &BoundExpr) -> (TypeId, bool) {
        // A value that already failed to bind was diagnosed at its own
        // site; substitute the error type without a second report.
        if value.has_errors {
            return (TypeId::ERROR, true);
        }

        let span = self.ctx.arena.span(value.expr);
        match value.type_id {
            Some(TypeId::VOID) => {
                self.error_bad_value(span, "void");
                (TypeId::ERROR, true)
            }
            Some(type_id) => {
                let flags = self.ctx.types.flags(type_id);
                if flags.intersects(TypeFlags::UNSAFE | TypeFlags::RESTRICTED) {
                    // The type itself is kept; its category is what rules
                    // it out as a field type.
                    let shown = self.ctx.types.type_to_string(type_id);
                    self.error_bad_value(span, &shown);
                    (type_id, true)
                } else {
                    (type_id, false)
                }
            }
            None => {
                let shown = sable_syntax::display_text(self.ctx.arena, value.expr);
                self.error_bad_value(span, &shown);
                (TypeId::ERROR, true)
            }
        }
    }

    fn error_bad_value(&mut self, span: Span, shown: &str) {
        self.ctx.error(
            span,
            format_message("Cannot assign '{0}' to an anonymous record property", &[shown]),
            codes::BAD_PROPERTY_VALUE_TYPE,
        );
    }

    /// Nullability annotation for a field of the given declared type.
    fn annotation_for(&self, type_id: TypeId) -> NullableAnnotation {
        match self.ctx.options.nullable_references {
            FeatureState::Enabled => {
                if self.ctx.types.flags(type_id).contains(TypeFlags::REFERENCE) {
                    NullableAnnotation::Annotated
                } else {
                    NullableAnnotation::NotAnnotated
                }
            }
            FeatureState::Disabled => NullableAnnotation::NotAnnotated,
            FeatureState::Unset => NullableAnnotation::Unknown,
        }
    }

    /// Registry key name for a field: its resolved name, or the positional
    /// placeholder when error recovery dropped it.
    fn field_key_name(&self, name: Option<Atom>, index: usize) -> Atom {
        match name {
            Some(atom) => atom,
            None => self.ctx.types.intern_string(&format!("${index}")),
        }
    }

    /// Re-derive property declaration records for semantic queries.
    ///
    /// Only initializers that declared their property with an explicit,
    /// valid, unique name token produce an entry; implicit or failed names
    /// never do.
    fn explicit_declarations(
        &self,
        creation: &RecordCreation,
        fields: &[RecordField],
        template: &Arc<RecordTemplate>,
    ) -> Vec<PropertyDeclaration> {
        let mut declarations = Vec::new();
        for (initializer, field) in creation.initializers.iter().zip(fields) {
            let Some(token) = &initializer.name else {
                continue;
            };
            let Some(name) = field.name else {
                continue;
            };
            if let Some(property) = template.members_named(name).next() {
                declarations.push(PropertyDeclaration {
                    name,
                    span: token.span,
                    property_index: property.index,
                });
            }
        }
        declarations
    }

    /// Decide whether anonymous record creation is permitted in the
    /// enclosing member; denial is diagnosed but non-fatal.
    fn check_creation_context(&mut self, span: Span) -> bool {
        if self.ctx.enclosing.allows_anonymous_records() {
            return true;
        }
        self.ctx.error(
            span,
            "An anonymous record is not available in this context",
            codes::ANONYMOUS_TYPE_NOT_AVAILABLE,
        );
        false
    }
}
