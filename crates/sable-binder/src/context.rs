//! Shared binding context.
//!
//! `BinderContext` carries the per-file state one binding pass needs: the
//! syntax arena, the shared type table and record registry, the options the
//! driver resolved, the enclosing-member description used by context
//! checks, and the diagnostic bag.

use rustc_hash::FxHashMap;
use sable_common::{Atom, DiagnosticBag, Span};
use sable_solver::{RecordRegistry, TypeId, TypeInterner};
use sable_syntax::SyntaxArena;

/// Resolved state of an optional language feature.
///
/// `Unset` is distinct from `Disabled`: a file bound without parse options
/// has an indeterminate feature state and downstream consumers must be able
/// to tell the difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureState {
    Enabled,
    Disabled,
    #[default]
    Unset,
}

/// Options resolved by the driver before binding starts.
#[derive(Clone, Debug, Default)]
pub struct BinderOptions {
    /// State of the nullable-references feature.
    pub nullable_references: FeatureState,
    /// Default file name recorded on diagnostics.
    pub file_name: String,
}

impl BinderOptions {
    pub fn with_file(file_name: impl Into<String>) -> Self {
        BinderOptions {
            file_name: file_name.into(),
            ..BinderOptions::default()
        }
    }
}

/// The member whose body is currently being bound.
///
/// Derived from the symbol table by the caller; the binder only needs this
/// compact description to decide context-sensitive rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnclosingMember {
    /// An ordinary method body.
    Method,
    /// A local function nested in a method body.
    LocalFunction,
    /// A field initializer; constant fields restrict what may appear.
    Field { is_const: bool },
    /// Directly inside a type body. Only script containers permit ambient
    /// executable statements.
    Container { is_script: bool },
    /// No enclosing member could be resolved.
    Unknown,
}

impl EnclosingMember {
    /// Whether anonymous record creation is permitted in this member.
    pub fn allows_anonymous_records(&self) -> bool {
        match self {
            EnclosingMember::Method | EnclosingMember::LocalFunction => true,
            EnclosingMember::Field { is_const } => !is_const,
            EnclosingMember::Container { is_script } => *is_script,
            EnclosingMember::Unknown => false,
        }
    }
}

/// Value bindings visible to the expression binder.
#[derive(Debug, Default)]
pub struct Scope {
    values: FxHashMap<Atom, TypeId>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Introduce or shadow a binding.
    pub fn define(&mut self, name: Atom, type_id: TypeId) {
        self.values.insert(name, type_id);
    }

    /// Resolve a simple name.
    pub fn lookup(&self, name: Atom) -> Option<TypeId> {
        self.values.get(&name).copied()
    }
}

/// Shared state for one binding pass over a file.
pub struct BinderContext<'a> {
    pub arena: &'a SyntaxArena,
    pub types: &'a TypeInterner,
    pub records: &'a RecordRegistry,
    pub options: BinderOptions,
    /// The member being bound; deny-by-default until the caller sets it.
    pub enclosing: EnclosingMember,
    pub scope: Scope,
    diagnostics: DiagnosticBag,
}

impl<'a> BinderContext<'a> {
    pub fn new(
        arena: &'a SyntaxArena,
        types: &'a TypeInterner,
        records: &'a RecordRegistry,
        options: BinderOptions,
    ) -> Self {
        let diagnostics = DiagnosticBag::with_file(options.file_name.clone());
        BinderContext {
            arena,
            types,
            records,
            options,
            enclosing: EnclosingMember::Unknown,
            scope: Scope::new(),
            diagnostics,
        }
    }

    /// Set the enclosing member for subsequent binds.
    pub fn in_member(mut self, enclosing: EnclosingMember) -> Self {
        self.enclosing = enclosing;
        self
    }

    /// Record an error diagnostic.
    pub fn error(&mut self, span: Span, message: impl Into<String>, code: u32) {
        self.diagnostics.error(span, message, code);
    }

    /// The diagnostics accumulated so far.
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Drain the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<sable_common::Diagnostic> {
        self.diagnostics.take()
    }
}
