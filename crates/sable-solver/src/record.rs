//! Anonymous record template registry.
//!
//! Anonymous record types are identified structurally by their ordered
//! (name, type) field sequence. The registry interns one `RecordTemplate`
//! per unique sequence for the whole compilation: two creation expressions
//! with identical sequences resolve to the same template instance, and the
//! template owns the synthesized properties and instance constructor.
//!
//! The registry is the only state shared between concurrent binds, so it is
//! internally synchronized; callers treat it as an opaque service and never
//! mutate its results.

use crate::types::{RecordTemplateId, TypeId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sable_common::{Atom, Span};
use std::sync::{Arc, RwLock};

/// One (name, type) entry of a structural record key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordFieldKey {
    pub name: Atom,
    pub type_id: TypeId,
}

/// A synthesized property of an anonymous record template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordProperty {
    pub name: Atom,
    pub type_id: TypeId,
    /// Declaration-order index; equals the source initializer index.
    pub index: usize,
}

/// A parameter of the synthesized instance constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordCtorParam {
    pub name: Atom,
    pub type_id: TypeId,
}

/// The synthesized instance constructor of an anonymous record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordCtor {
    pub params: Vec<RecordCtorParam>,
}

/// An interned anonymous record template.
///
/// Referenced (not owned) by bound nodes; the registry keeps templates
/// alive for the whole compilation.
#[derive(Debug)]
pub struct RecordTemplate {
    pub id: RecordTemplateId,
    pub properties: Vec<RecordProperty>,
    pub ctor: RecordCtor,
    /// Creation site of the first expression that interned this template.
    pub location: Span,
}

impl RecordTemplate {
    /// Number of synthesized properties.
    pub fn arity(&self) -> usize {
        self.properties.len()
    }

    /// All members with the given name (zero or one for well-formed keys).
    pub fn members_named(&self, name: Atom) -> impl Iterator<Item = &RecordProperty> {
        self.properties.iter().filter(move |p| p.name == name)
    }
}

/// Compilation-wide intern table for anonymous record templates.
///
/// Keyed by the ordered field sequence; safe for concurrent interning from
/// parallel binding workers.
pub struct RecordRegistry {
    templates: DashMap<Vec<RecordFieldKey>, Arc<RecordTemplate>>,
    by_id: RwLock<Vec<Arc<RecordTemplate>>>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        RecordRegistry {
            templates: DashMap::new(),
            by_id: RwLock::new(Vec::new()),
        }
    }

    /// Intern the ordered field sequence, returning the shared template.
    ///
    /// The first interning of a key allocates the template's properties and
    /// constructor and records `location`; later interning of the same key
    /// returns the existing instance untouched.
    pub fn intern(&self, fields: &[RecordFieldKey], location: Span) -> Arc<RecordTemplate> {
        if let Some(existing) = self.templates.get(fields) {
            return existing.clone();
        }

        match self.templates.entry(fields.to_vec()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let mut by_id = self
                    .by_id
                    .write()
                    .expect("record registry lock poisoned");
                let id = RecordTemplateId(by_id.len() as u32);

                let properties: Vec<RecordProperty> = fields
                    .iter()
                    .enumerate()
                    .map(|(index, key)| RecordProperty {
                        name: key.name,
                        type_id: key.type_id,
                        index,
                    })
                    .collect();
                let ctor = RecordCtor {
                    params: fields
                        .iter()
                        .map(|key| RecordCtorParam {
                            name: key.name,
                            type_id: key.type_id,
                        })
                        .collect(),
                };

                tracing::debug!(
                    id = id.0,
                    fields = fields.len(),
                    "interned anonymous record template"
                );

                let template = Arc::new(RecordTemplate {
                    id,
                    properties,
                    ctor,
                    location,
                });
                by_id.push(template.clone());
                entry.insert(template.clone());
                template
            }
        }
    }

    /// Get a template by id.
    pub fn template(&self, id: RecordTemplateId) -> Option<Arc<RecordTemplate>> {
        self.by_id
            .read()
            .ok()?
            .get(id.0 as usize)
            .cloned()
    }

    /// Number of distinct templates interned so far.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for RecordRegistry {
    fn default() -> Self {
        Self::new()
    }
}
