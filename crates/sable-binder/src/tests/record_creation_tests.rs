//! Scenario tests for anonymous record creation binding.

use crate::{
    BinderContext, BinderOptions, BoundRecordCreation, EnclosingMember, FeatureState,
    NullableAnnotation, RecordCreationBinder,
};
use sable_common::{Diagnostic, Span, codes};
use sable_solver::{RecordRegistry, TypeData, TypeFlags, TypeId, TypeInterner};
use sable_syntax::{FieldInitializer, LiteralKind, NameToken, RecordCreation, SyntaxArena};
use std::sync::Arc;

fn bind_with(
    arena: &SyntaxArena,
    types: &TypeInterner,
    records: &RecordRegistry,
    scope: &[(&str, TypeId)],
    options: BinderOptions,
    enclosing: EnclosingMember,
    creation: &RecordCreation,
) -> (BoundRecordCreation, Vec<Diagnostic>) {
    let mut ctx = BinderContext::new(arena, types, records, options).in_member(enclosing);
    for &(name, type_id) in scope {
        let atom = types.intern_string(name);
        ctx.scope.define(atom, type_id);
    }
    let bound = RecordCreationBinder::new(&mut ctx).bind_creation(creation);
    let diagnostics = ctx.take_diagnostics();
    (bound, diagnostics)
}

fn bind(
    arena: &SyntaxArena,
    types: &TypeInterner,
    records: &RecordRegistry,
    scope: &[(&str, TypeId)],
    creation: &RecordCreation,
) -> (BoundRecordCreation, Vec<Diagnostic>) {
    bind_with(
        arena,
        types,
        records,
        scope,
        BinderOptions::with_file("test.sb"),
        EnclosingMember::Method,
        creation,
    )
}

fn named(arena: &SyntaxArena, name: &str, value: sable_syntax::ExprId) -> FieldInitializer {
    let value_span = arena.span(value);
    FieldInitializer {
        name: Some(NameToken::new(name, Span::at(value_span.start))),
        value,
        span: value_span,
    }
}

fn bare(arena: &SyntaxArena, value: sable_syntax::ExprId) -> FieldInitializer {
    FieldInitializer {
        name: None,
        value,
        span: arena.span(value),
    }
}

fn creation(initializers: Vec<FieldInitializer>) -> RecordCreation {
    let span = initializers
        .iter()
        .map(|i| i.span)
        .reduce(|a, b| a.to(b))
        .unwrap_or_default();
    RecordCreation { initializers, span }
}

fn error_codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().filter(|d| d.is_error()).map(|d| d.code).collect()
}

#[test]
fn test_two_explicit_fields() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let a = arena.literal(LiteralKind::Str("a".into()), Span::new(13, 16));
    let x = named(&arena, "x", one);
    let y = named(&arena, "y", a);
    let creation = creation(vec![x, y]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert!(diagnostics.is_empty());
    assert!(!bound.has_errors);
    assert_eq!(bound.fields.len(), 2);
    assert_eq!(bound.field_name(0, &types), "x");
    assert_eq!(bound.field_name(1, &types), "y");
    assert_eq!(bound.fields[0].type_id, TypeId::INT);
    assert_eq!(bound.fields[1].type_id, TypeId::STRING);

    // The template mirrors the fields in order, and the constructor takes
    // one parameter per property.
    assert_eq!(bound.template.arity(), 2);
    assert_eq!(bound.template.properties[1].type_id, TypeId::STRING);
    assert_eq!(bound.ctor().params.len(), 2);

    // Both initializers had explicit names, so both produce declarations.
    assert_eq!(bound.declarations.len(), 2);
    assert_eq!(bound.declarations[0].property_index, 0);
    assert_eq!(bound.declarations[1].property_index, 1);

    // The record type is backed by the interned template.
    assert_eq!(
        types.lookup(bound.record_type),
        Some(TypeData::Record(bound.template.id))
    );
}

#[test]
fn test_duplicate_property_name() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let two = arena.literal(LiteralKind::Int(2), Span::new(13, 14));
    let first = named(&arena, "x", one);
    let second = named(&arena, "x", two);
    let creation = creation(vec![first, second]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert!(bound.has_errors);
    assert_eq!(error_codes(&diagnostics), vec![codes::DUPLICATE_PROPERTY_NAME]);

    // First occurrence keeps the name; the duplicate gets the placeholder
    // but its type is still computed and retained.
    assert_eq!(bound.fields.len(), 2);
    assert_eq!(bound.field_name(0, &types), "x");
    assert!(bound.fields[0].name.is_some());
    assert_eq!(bound.fields[0].type_id, TypeId::INT);
    assert_eq!(bound.fields[1].name, None);
    assert_eq!(bound.field_name(1, &types), "$1");
    assert_eq!(bound.fields[1].type_id, TypeId::INT);

    // Only the surviving explicit name produces a declaration record.
    assert_eq!(bound.declarations.len(), 1);
    assert_eq!(bound.declarations[0].property_index, 0);
}

#[test]
fn test_three_way_duplicate_keeps_first() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let a = arena.literal(LiteralKind::Str("a".into()), Span::new(13, 16));
    let two = arena.literal(LiteralKind::Int(2), Span::new(22, 23));
    let creation = creation(vec![
        named(&arena, "x", one),
        named(&arena, "x", a),
        named(&arena, "x", two),
    ]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert_eq!(
        error_codes(&diagnostics),
        vec![codes::DUPLICATE_PROPERTY_NAME, codes::DUPLICATE_PROPERTY_NAME]
    );
    assert_eq!(bound.field_name(0, &types), "x");
    assert_eq!(bound.field_name(1, &types), "$1");
    assert_eq!(bound.field_name(2, &types), "$2");
    assert_eq!(bound.fields[1].type_id, TypeId::STRING);
    assert_eq!(bound.fields[2].type_id, TypeId::INT);
}

#[test]
fn test_qualified_name_infers_trailing_identifier() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let foo = types.class_type("Foo", &[("Bar", TypeId::STRING)]);

    let foo_expr = arena.ident("Foo", Span::new(6, 9));
    let bar = arena.qualified(
        foo_expr,
        NameToken::new("Bar", Span::new(10, 13)),
        Span::new(6, 13),
    );
    let creation = creation(vec![bare(&arena, bar)]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("Foo", foo)], &creation);

    assert!(diagnostics.is_empty());
    assert!(!bound.has_errors);
    assert_eq!(bound.field_name(0, &types), "Bar");
    assert_eq!(bound.fields[0].type_id, TypeId::STRING);
    // Inferred names never produce explicit declaration records.
    assert!(bound.declarations.is_empty());
}

#[test]
fn test_conditional_access_infers_bound_member() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let account = types.class_type("Account", &[("owner", TypeId::STRING)]);

    let a = arena.ident("a", Span::new(6, 7));
    let binding = arena.member_binding(NameToken::new("owner", Span::new(9, 14)), Span::new(8, 14));
    let cond = arena.conditional_access(a, binding, Span::new(6, 14));
    let creation = creation(vec![bare(&arena, cond)]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("a", account)], &creation);

    assert!(diagnostics.is_empty());
    assert_eq!(bound.field_name(0, &types), "owner");
    assert_eq!(bound.fields[0].type_id, TypeId::STRING);
}

#[test]
fn test_void_call_value() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let f = types.function_type(vec![], TypeId::VOID);

    let callee = arena.ident("f", Span::new(6, 7));
    let call = arena.call(callee, vec![], Span::new(6, 9));
    let creation = creation(vec![bare(&arena, call)]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("f", f)], &creation);

    // A call is not a name-bearing declarator shape, and its value is void:
    // both problems are reported, and the field survives with a
    // placeholder name and the error type.
    assert_eq!(
        error_codes(&diagnostics),
        vec![codes::INVALID_MEMBER_DECLARATOR, codes::BAD_PROPERTY_VALUE_TYPE]
    );
    assert!(bound.has_errors);
    assert_eq!(bound.fields.len(), 1);
    assert_eq!(bound.field_name(0, &types), "$0");
    assert_eq!(bound.fields[0].type_id, TypeId::ERROR);
}

#[test]
fn test_named_void_value_keeps_name() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let f = types.function_type(vec![], TypeId::VOID);

    let callee = arena.ident("f", Span::new(10, 11));
    let call = arena.call(callee, vec![], Span::new(10, 13));
    let init = named(&arena, "v", call);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("f", f)], &creation);

    assert_eq!(error_codes(&diagnostics), vec![codes::BAD_PROPERTY_VALUE_TYPE]);
    assert!(diagnostics[0].message.contains("'void'"));
    assert_eq!(bound.field_name(0, &types), "v");
    assert_eq!(bound.fields[0].type_id, TypeId::ERROR);
    // The explicit name survived, so the declaration record exists even
    // though the value was rejected.
    assert_eq!(bound.declarations.len(), 1);
}

#[test]
fn test_null_literal_cites_expression_text() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let null = arena.literal(LiteralKind::Null, Span::new(10, 14));
    let init = named(&arena, "x", null);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert_eq!(error_codes(&diagnostics), vec![codes::BAD_PROPERTY_VALUE_TYPE]);
    assert!(diagnostics[0].message.contains("'null'"));
    assert_eq!(bound.fields[0].type_id, TypeId::ERROR);
    assert_eq!(bound.field_name(0, &types), "x");
}

#[test]
fn test_unsafe_pointer_value_keeps_type() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let int_ptr = types.pointer_type(TypeId::INT);

    let p = arena.ident("p", Span::new(10, 11));
    let init = named(&arena, "x", p);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("p", int_ptr)], &creation);

    assert_eq!(error_codes(&diagnostics), vec![codes::BAD_PROPERTY_VALUE_TYPE]);
    assert!(bound.has_errors);
    // Unsafe types are reported but recorded as-is.
    assert_eq!(bound.fields[0].type_id, int_ptr);
    assert!(types.flags(int_ptr).contains(TypeFlags::UNSAFE));
}

#[test]
fn test_restricted_value_keeps_type() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let window = types.ref_struct_type("Window", &[]);

    let w = arena.ident("w", Span::new(10, 11));
    let init = named(&arena, "x", w);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("w", window)], &creation);

    assert_eq!(error_codes(&diagnostics), vec![codes::BAD_PROPERTY_VALUE_TYPE]);
    assert_eq!(bound.fields[0].type_id, window);
}

#[test]
fn test_broken_value_is_not_diagnosed_twice() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let nope = arena.ident("nope", Span::new(10, 14));
    let init = named(&arena, "x", nope);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    // The unresolved name was diagnosed by expression binding; the type
    // validity check substitutes the error type silently.
    assert_eq!(error_codes(&diagnostics), vec![codes::UNRESOLVED_NAME]);
    assert!(bound.has_errors);
    assert_eq!(bound.fields[0].type_id, TypeId::ERROR);
    assert_eq!(bound.field_name(0, &types), "x");
}

#[test]
fn test_context_gate_in_const_field() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let init = named(&arena, "x", one);
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind_with(
        &arena,
        &types,
        &records,
        &[],
        BinderOptions::with_file("test.sb"),
        EnclosingMember::Field { is_const: true },
        &creation,
    );

    // Denial is non-fatal: the node is still produced with its fields.
    assert_eq!(error_codes(&diagnostics), vec![codes::ANONYMOUS_TYPE_NOT_AVAILABLE]);
    assert!(bound.has_errors);
    assert_eq!(bound.fields.len(), 1);
    assert_eq!(bound.field_name(0, &types), "x");
    assert_eq!(bound.fields[0].type_id, TypeId::INT);
}

#[test]
fn test_context_gate_decisions() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let init = named(&arena, "x", one);
    let creation = creation(vec![init]);

    let cases = [
        (EnclosingMember::Method, true),
        (EnclosingMember::LocalFunction, true),
        (EnclosingMember::Field { is_const: false }, true),
        (EnclosingMember::Field { is_const: true }, false),
        (EnclosingMember::Container { is_script: true }, true),
        (EnclosingMember::Container { is_script: false }, false),
        (EnclosingMember::Unknown, false),
    ];

    for (enclosing, allowed) in cases {
        let (bound, diagnostics) = bind_with(
            &arena,
            &types,
            &records,
            &[],
            BinderOptions::with_file("test.sb"),
            enclosing,
            &creation,
        );
        assert_eq!(bound.has_errors, !allowed, "context {enclosing:?}");
        if allowed {
            assert!(diagnostics.is_empty(), "context {enclosing:?}");
        } else {
            assert_eq!(
                error_codes(&diagnostics),
                vec![codes::ANONYMOUS_TYPE_NOT_AVAILABLE],
                "context {enclosing:?}"
            );
        }
    }
}

#[test]
fn test_gate_runs_after_field_resolution() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let two = arena.literal(LiteralKind::Int(2), Span::new(13, 14));
    let creation = creation(vec![named(&arena, "x", one), named(&arena, "x", two)]);

    let (bound, diagnostics) = bind_with(
        &arena,
        &types,
        &records,
        &[],
        BinderOptions::with_file("test.sb"),
        EnclosingMember::Field { is_const: true },
        &creation,
    );

    // Field diagnostics come first; the context denial is appended last
    // and neither suppresses the other.
    assert_eq!(
        error_codes(&diagnostics),
        vec![codes::DUPLICATE_PROPERTY_NAME, codes::ANONYMOUS_TYPE_NOT_AVAILABLE]
    );
    assert!(bound.has_errors);
}

#[test]
fn test_nullability_tristate() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let widget = types.class_type("Widget", &[("id", TypeId::INT)]);

    let obj = arena.ident("obj", Span::new(13, 16));
    let count = arena.literal(LiteralKind::Int(7), Span::new(26, 27));
    let name_init = named(&arena, "name", obj);
    let count_init = named(&arena, "count", count);
    let creation = creation(vec![name_init, count_init]);

    let cases = [
        (FeatureState::Enabled, NullableAnnotation::Annotated, NullableAnnotation::NotAnnotated),
        (
            FeatureState::Disabled,
            NullableAnnotation::NotAnnotated,
            NullableAnnotation::NotAnnotated,
        ),
        (FeatureState::Unset, NullableAnnotation::Unknown, NullableAnnotation::Unknown),
    ];

    for (feature, reference_expected, value_expected) in cases {
        let options = BinderOptions {
            nullable_references: feature,
            file_name: "test.sb".to_string(),
        };
        let (bound, diagnostics) = bind_with(
            &arena,
            &types,
            &records,
            &[("obj", widget)],
            options,
            EnclosingMember::Method,
            &creation,
        );
        assert!(diagnostics.is_empty());
        assert_eq!(bound.fields[0].nullability, reference_expected, "feature {feature:?}");
        assert_eq!(bound.fields[1].nullability, value_expected, "feature {feature:?}");
    }
}

#[test]
fn test_positional_invariant_under_total_failure() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    // Three declarators, none of which yields a name or a usable type.
    let lit = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let null = arena.literal(LiteralKind::Null, Span::new(9, 13));
    let x = arena.ident("x", Span::new(15, 16));
    let y = arena.ident("y", Span::new(19, 20));
    let sum = arena.binary(sable_syntax::BinaryOp::Add, x, y, Span::new(15, 20));
    let creation = creation(vec![bare(&arena, lit), bare(&arena, null), bare(&arena, sum)]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert!(bound.has_errors);
    assert!(!diagnostics.is_empty());
    // No field is dropped or reordered.
    assert_eq!(bound.fields.len(), 3);
    assert_eq!(bound.arguments.len(), 3);
    for (index, field) in bound.fields.iter().enumerate() {
        assert_eq!(field.span, creation.initializers[index].span);
        assert_eq!(bound.field_name(index, &types), format!("${index}"));
    }
    assert_eq!(bound.template.arity(), 3);
}

#[test]
fn test_empty_creation() {
    let arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let creation = RecordCreation {
        initializers: Vec::new(),
        span: Span::new(0, 8),
    };

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    assert!(diagnostics.is_empty());
    assert!(!bound.has_errors);
    assert!(bound.fields.is_empty());
    assert_eq!(bound.template.arity(), 0);
    assert!(bound.declarations.is_empty());
}

#[test]
fn test_identical_creations_share_template() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let a = arena.literal(LiteralKind::Str("a".into()), Span::new(13, 16));
    let first = creation(vec![named(&arena, "x", one), named(&arena, "y", a)]);

    let two = arena.literal(LiteralKind::Int(2), Span::new(36, 37));
    let b = arena.literal(LiteralKind::Str("b".into()), Span::new(43, 46));
    let second = creation(vec![named(&arena, "x", two), named(&arena, "y", b)]);

    let (bound_first, _) = bind(&arena, &types, &records, &[], &first);
    let (bound_second, _) = bind(&arena, &types, &records, &[], &second);

    // Identical ordered (name, type) sequences resolve to the same
    // template instance and the same record type.
    assert!(Arc::ptr_eq(&bound_first.template, &bound_second.template));
    assert_eq!(bound_first.record_type, bound_second.record_type);
    assert_eq!(records.len(), 1);
    // The first creation's site is the one the template remembers.
    assert_eq!(bound_second.template.location, first.span);
}

#[test]
fn test_field_order_distinguishes_templates() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let a = arena.literal(LiteralKind::Str("a".into()), Span::new(13, 16));
    let first = creation(vec![named(&arena, "x", one), named(&arena, "y", a)]);

    let b = arena.literal(LiteralKind::Str("b".into()), Span::new(36, 39));
    let two = arena.literal(LiteralKind::Int(2), Span::new(45, 46));
    let second = creation(vec![named(&arena, "y", b), named(&arena, "x", two)]);

    let (bound_first, _) = bind(&arena, &types, &records, &[], &first);
    let (bound_second, _) = bind(&arena, &types, &records, &[], &second);

    assert!(!Arc::ptr_eq(&bound_first.template, &bound_second.template));
    assert_ne!(bound_first.record_type, bound_second.record_type);
    assert_eq!(records.len(), 2);
}

#[test]
fn test_inferred_name_collides_with_explicit() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();
    let point = types.class_type("Point", &[("x", TypeId::INT)]);

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let p = arena.ident("p", Span::new(13, 14));
    let px = arena.member(p, NameToken::new("x", Span::new(15, 16)), Span::new(13, 16));
    let creation = creation(vec![named(&arena, "x", one), bare(&arena, px)]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[("p", point)], &creation);

    // Uniqueness applies across explicit and inferred names alike.
    assert_eq!(error_codes(&diagnostics), vec![codes::DUPLICATE_PROPERTY_NAME]);
    assert_eq!(bound.field_name(0, &types), "x");
    assert_eq!(bound.field_name(1, &types), "$1");
    assert_eq!(bound.fields[1].type_id, TypeId::INT);
}

#[test]
fn test_missing_explicit_token() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(10, 11));
    let init = FieldInitializer {
        name: Some(NameToken::missing(Span::at(6))),
        value: one,
        span: Span::new(6, 11),
    };
    let creation = creation(vec![init]);

    let (bound, diagnostics) = bind(&arena, &types, &records, &[], &creation);

    // The parser already reported the missing token; binding only marks
    // the node and still types the value.
    assert!(diagnostics.is_empty());
    assert!(bound.has_errors);
    assert_eq!(bound.field_name(0, &types), "$0");
    assert_eq!(bound.fields[0].type_id, TypeId::INT);
    assert!(bound.declarations.is_empty());
}

#[test]
fn test_declarations_skip_inferred_names() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let y = arena.ident("y", Span::new(13, 14));
    let creation = creation(vec![named(&arena, "x", one), bare(&arena, y)]);

    let (bound, diagnostics) =
        bind(&arena, &types, &records, &[("y", TypeId::STRING)], &creation);

    assert!(diagnostics.is_empty());
    assert_eq!(bound.fields.len(), 2);
    assert_eq!(bound.field_name(1, &types), "y");
    // Only the explicitly named field has a declaration record.
    assert_eq!(bound.declarations.len(), 1);
    assert_eq!(bound.declarations[0].property_index, 0);
}

#[test]
fn test_member_access_on_record_type() {
    let mut arena = SyntaxArena::new();
    let types = TypeInterner::new();
    let records = RecordRegistry::new();

    let one = arena.literal(LiteralKind::Int(1), Span::new(6, 7));
    let init = named(&arena, "x", one);
    let first = creation(vec![init]);
    let (bound, _) = bind(&arena, &types, &records, &[], &first);

    // A value typed by the synthesized record exposes its properties to
    // ordinary member binding.
    let r = arena.ident("r", Span::new(20, 21));
    let rx = arena.member(r, NameToken::new("x", Span::new(22, 23)), Span::new(20, 23));
    let second = creation(vec![bare(&arena, rx)]);

    let (bound_second, diagnostics) =
        bind(&arena, &types, &records, &[("r", bound.record_type)], &second);

    assert!(diagnostics.is_empty());
    assert_eq!(bound_second.field_name(0, &types), "x");
    assert_eq!(bound_second.fields[0].type_id, TypeId::INT);
}
