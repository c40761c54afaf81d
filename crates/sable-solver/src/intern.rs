//! Type interning for structural deduplication.
//!
//! The intern table converts `TypeData` structures into lightweight
//! `TypeId` handles. Benefits:
//! - O(1) type equality (just compare TypeId values)
//! - Memory efficient (each unique structure stored once)
//! - Thread-safe for concurrent binding across worker threads

use crate::types::{
    FunctionShape, FunctionShapeId, MemberInfo, NamedKind, NamedShape, RecordTemplateId, ShapeId,
    TypeData, TypeFlags, TypeId,
};
use rustc_hash::FxHashMap;
use sable_common::{Atom, ShardedInterner};
use std::hash::Hash;
use std::sync::{Arc, RwLock};

struct ValueInterner<T> {
    items: Vec<Arc<T>>,
    map: FxHashMap<Arc<T>, u32>,
}

impl<T> ValueInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        ValueInterner {
            items: Vec::new(),
            map: FxHashMap::default(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }

        let arc = Arc::new(value);
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<T>> {
        self.items.get(id as usize).cloned()
    }
}

#[derive(Default)]
struct TypeTable {
    key_to_id: FxHashMap<TypeData, TypeId>,
    id_to_key: Vec<TypeData>,
}

/// Type intern table.
/// Thread-safe via RwLock for concurrent access.
pub struct TypeInterner {
    /// String interner for member names; shared with the binder.
    string_interner: ShardedInterner,
    types: RwLock<TypeTable>,
    named_shapes: RwLock<ValueInterner<NamedShape>>,
    function_shapes: RwLock<ValueInterner<FunctionShape>>,
}

impl TypeInterner {
    /// Create a new interner with common identifiers pre-registered.
    pub fn new() -> Self {
        TypeInterner {
            string_interner: {
                let interner = ShardedInterner::new();
                interner.intern_common();
                interner
            },
            types: RwLock::new(TypeTable::default()),
            named_shapes: RwLock::new(ValueInterner::new()),
            function_shapes: RwLock::new(ValueInterner::new()),
        }
    }

    /// Intern a string into an Atom.
    pub fn intern_string(&self, s: &str) -> Atom {
        self.string_interner.intern(s)
    }

    /// Resolve an Atom back to its string value.
    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.string_interner.resolve(atom)
    }

    /// Intern a structural type key, returning its TypeId.
    pub fn intern(&self, data: TypeData) -> TypeId {
        {
            let Ok(table) = self.types.read() else {
                return TypeId::ERROR;
            };
            if let Some(&id) = table.key_to_id.get(&data) {
                return id;
            }
        }

        let Ok(mut table) = self.types.write() else {
            return TypeId::ERROR;
        };
        if let Some(&id) = table.key_to_id.get(&data) {
            return id;
        }
        let id = TypeId(TypeId::FIRST_INTERNED + table.id_to_key.len() as u32);
        table.id_to_key.push(data);
        table.key_to_id.insert(data, id);
        tracing::trace!(id = id.0, ?data, "interned type key");
        id
    }

    /// Look up the structural key of an interned type.
    /// Returns None for intrinsics and invalid ids.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        if id.is_intrinsic() {
            return None;
        }
        let table = self.types.read().ok()?;
        table
            .id_to_key
            .get((id.0 - TypeId::FIRST_INTERNED) as usize)
            .copied()
    }

    /// Category flags for a type.
    pub fn flags(&self, id: TypeId) -> TypeFlags {
        match id {
            TypeId::ERROR => TypeFlags::ERROR,
            TypeId::STRING => TypeFlags::REFERENCE,
            _ if id.is_intrinsic() => TypeFlags::empty(),
            _ => match self.lookup(id) {
                Some(TypeData::Pointer(_)) => TypeFlags::UNSAFE,
                Some(TypeData::Named(shape_id)) => match self.named_shape(shape_id) {
                    Some(shape) => match shape.kind {
                        NamedKind::Class => TypeFlags::REFERENCE,
                        NamedKind::Struct => TypeFlags::empty(),
                        NamedKind::RefStruct => TypeFlags::RESTRICTED,
                    },
                    None => TypeFlags::empty(),
                },
                Some(TypeData::Function(_)) => TypeFlags::empty(),
                // Anonymous records are synthesized as reference types.
                Some(TypeData::Record(_)) => TypeFlags::REFERENCE,
                None => TypeFlags::empty(),
            },
        }
    }

    /// Check if a type is the synthetic error type.
    pub fn is_error(&self, id: TypeId) -> bool {
        id == TypeId::ERROR
    }

    /// Intern a pointer type.
    pub fn pointer_type(&self, pointee: TypeId) -> TypeId {
        self.intern(TypeData::Pointer(pointee))
    }

    /// Intern a named type from its shape.
    pub fn named_type(&self, shape: NamedShape) -> TypeId {
        let shape_id = {
            let Ok(mut shapes) = self.named_shapes.write() else {
                return TypeId::ERROR;
            };
            ShapeId(shapes.intern(shape))
        };
        self.intern(TypeData::Named(shape_id))
    }

    /// Intern a class type (reference category) with the given members.
    pub fn class_type(&self, name: &str, members: &[(&str, TypeId)]) -> TypeId {
        self.named_with_kind(name, NamedKind::Class, members)
    }

    /// Intern a struct type (value category) with the given members.
    pub fn struct_type(&self, name: &str, members: &[(&str, TypeId)]) -> TypeId {
        self.named_with_kind(name, NamedKind::Struct, members)
    }

    /// Intern a stack-only ref struct type with the given members.
    pub fn ref_struct_type(&self, name: &str, members: &[(&str, TypeId)]) -> TypeId {
        self.named_with_kind(name, NamedKind::RefStruct, members)
    }

    fn named_with_kind(&self, name: &str, kind: NamedKind, members: &[(&str, TypeId)]) -> TypeId {
        let members = members
            .iter()
            .map(|&(member_name, type_id)| MemberInfo {
                name: self.intern_string(member_name),
                type_id,
            })
            .collect();
        self.named_type(NamedShape {
            name: self.intern_string(name),
            kind,
            members,
        })
    }

    /// Intern a function type.
    pub fn function_type(&self, params: Vec<TypeId>, return_type: TypeId) -> TypeId {
        let shape_id = {
            let Ok(mut shapes) = self.function_shapes.write() else {
                return TypeId::ERROR;
            };
            FunctionShapeId(shapes.intern(FunctionShape {
                params,
                return_type,
            }))
        };
        self.intern(TypeData::Function(shape_id))
    }

    /// Intern the type backed by an anonymous record template.
    pub fn record_type(&self, template: RecordTemplateId) -> TypeId {
        self.intern(TypeData::Record(template))
    }

    /// Get a named shape by id.
    pub fn named_shape(&self, id: ShapeId) -> Option<Arc<NamedShape>> {
        self.named_shapes.read().ok()?.get(id.0)
    }

    /// Get a function shape by id.
    pub fn function_shape(&self, id: FunctionShapeId) -> Option<Arc<FunctionShape>> {
        self.function_shapes.read().ok()?.get(id.0)
    }

    /// Type of the member `name` on a named type, if any.
    ///
    /// Anonymous record members are owned by the `RecordRegistry` and are
    /// not resolved here.
    pub fn member_type(&self, receiver: TypeId, name: Atom) -> Option<TypeId> {
        match self.lookup(receiver)? {
            TypeData::Named(shape_id) => {
                let shape = self.named_shape(shape_id)?;
                shape
                    .members
                    .iter()
                    .find(|m| m.name == name)
                    .map(|m| m.type_id)
            }
            _ => None,
        }
    }

    /// Human-readable type name for diagnostics.
    pub fn type_to_string(&self, id: TypeId) -> String {
        match id {
            TypeId::ERROR => "<error>".to_string(),
            TypeId::VOID => "void".to_string(),
            TypeId::BOOL => "bool".to_string(),
            TypeId::INT => "int".to_string(),
            TypeId::FLOAT => "float".to_string(),
            TypeId::STRING => "string".to_string(),
            _ => match self.lookup(id) {
                Some(TypeData::Pointer(pointee)) => {
                    format!("*{}", self.type_to_string(pointee))
                }
                Some(TypeData::Named(shape_id)) => match self.named_shape(shape_id) {
                    Some(shape) => self.resolve_atom(shape.name).to_string(),
                    None => "<unknown>".to_string(),
                },
                Some(TypeData::Function(shape_id)) => match self.function_shape(shape_id) {
                    Some(shape) => {
                        let params: Vec<String> =
                            shape.params.iter().map(|&p| self.type_to_string(p)).collect();
                        format!(
                            "fn({}) -> {}",
                            params.join(", "),
                            self.type_to_string(shape.return_type)
                        )
                    }
                    None => "<unknown>".to_string(),
                },
                Some(TypeData::Record(_)) => "<anonymous record>".to_string(),
                None => "<unknown>".to_string(),
            },
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}
