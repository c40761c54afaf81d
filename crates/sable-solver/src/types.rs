//! Structural type representation.
//!
//! Types are interned: each unique structure is stored once and referenced
//! by a lightweight `TypeId`. Equality is O(1) id comparison. Low ids are
//! reserved for intrinsics and never appear in the intern table.

use bitflags::bitflags;
use sable_common::Atom;

/// Interned type handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Synthetic error type substituted on failed binding.
    pub const ERROR: TypeId = TypeId(0);
    /// The `void` marker type of expressions with no value.
    pub const VOID: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const FLOAT: TypeId = TypeId(4);
    /// Built-in string type; reference category.
    pub const STRING: TypeId = TypeId(5);

    /// First id handed out by the intern table.
    pub(crate) const FIRST_INTERNED: u32 = 16;

    /// Check if this id refers to an intrinsic (non-interned) type.
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_INTERNED
    }
}

bitflags! {
    /// Category flags used by binding rules.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TypeFlags: u8 {
        /// Reference category (classes, strings, anonymous records).
        const REFERENCE = 1 << 0;
        /// Pointer-like types usable only in unsafe code.
        const UNSAFE = 1 << 1;
        /// Stack-only types that may not be stored as fields.
        const RESTRICTED = 1 << 2;
        /// The synthetic error type.
        const ERROR = 1 << 3;
    }
}

/// Index of a named-type shape in the intern table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Index of a function shape in the intern table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

/// Identity of an anonymous record template in the `RecordRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordTemplateId(pub u32);

/// Declaration kind of a named type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKind {
    /// Heap-allocated reference type.
    Class,
    /// Value type.
    Struct,
    /// Stack-only value type; may not be stored as a field.
    RefStruct,
}

/// A member of a named type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    pub name: Atom,
    pub type_id: TypeId,
}

/// Shape of a named (nominal) type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedShape {
    pub name: Atom,
    pub kind: NamedKind,
    pub members: Vec<MemberInfo>,
}

/// Shape of a function type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<TypeId>,
    pub return_type: TypeId,
}

/// Structural key of an interned (non-intrinsic) type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    /// Raw pointer to a pointee type; unsafe category.
    Pointer(TypeId),
    /// Named nominal type.
    Named(ShapeId),
    /// Function type.
    Function(FunctionShapeId),
    /// Anonymous record type backed by a registry template.
    Record(RecordTemplateId),
}
