//! Read-only query surface over a frozen hierarchy.
//!
//! This is what the hypergraph engine and the pattern miner see. Unknown
//! names and ids are "no match", never an error.

use std::sync::Arc;

use atomtypes_core::TypeId;

use crate::hierarchy::Hierarchy;
use crate::table::TypeRecord;

/// Anything that can name a type: an id or a type name.
pub trait TypeKey {
    fn resolve_in(&self, hierarchy: &Hierarchy) -> Option<TypeId>;
}

impl TypeKey for TypeId {
    fn resolve_in(&self, hierarchy: &Hierarchy) -> Option<TypeId> {
        hierarchy.contains(*self).then_some(*self)
    }
}

impl TypeKey for str {
    fn resolve_in(&self, hierarchy: &Hierarchy) -> Option<TypeId> {
        hierarchy.resolve(self)
    }
}

impl TypeKey for String {
    fn resolve_in(&self, hierarchy: &Hierarchy) -> Option<TypeId> {
        hierarchy.resolve(self)
    }
}

impl<K: TypeKey + ?Sized> TypeKey for &K {
    fn resolve_in(&self, hierarchy: &Hierarchy) -> Option<TypeId> {
        (**self).resolve_in(hierarchy)
    }
}

/// A value with an intrinsic type tag.
///
/// The tag is fixed when the value is built; implementors must not
/// change it afterwards.
pub trait Typed {
    fn atom_type(&self) -> TypeId;
}

/// A value paired with the type it was built as.
///
/// There is no way to change the tag of an existing `Tagged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tagged<T> {
    ty: TypeId,
    value: T,
}

impl<T> Tagged<T> {
    pub fn new(ty: TypeId, value: T) -> Self {
        Self { ty, value }
    }

    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Typed for Tagged<T> {
    fn atom_type(&self) -> TypeId {
        self.ty
    }
}

/// Cheap, cloneable handle for queries. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct TypeQueryFacade {
    hierarchy: Arc<Hierarchy>,
}

impl TypeQueryFacade {
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        self.hierarchy.resolve(name)
    }

    /// `a` is `b` or a subtype of `b`. False if either is unknown.
    pub fn is_a(&self, a: impl TypeKey, b: impl TypeKey) -> bool {
        match (self.key(&a), self.key(&b)) {
            (Some(a), Some(b)) => self.hierarchy.graph().is_subtype(a, b),
            _ => false,
        }
    }

    pub fn type_of(&self, value: &impl Typed) -> TypeId {
        value.atom_type()
    }

    /// Whether `value` may fill a slot declared as `slot`.
    pub fn conforms(&self, value: &impl Typed, slot: impl TypeKey) -> bool {
        self.is_a(value.atom_type(), slot)
    }

    /// Tag `value` with a known type. `None` if the type is unknown.
    pub fn tag<T>(&self, ty: impl TypeKey, value: T) -> Option<Tagged<T>> {
        self.key(&ty).map(|ty| Tagged::new(ty, value))
    }

    /// Types both `a` and `b` are, sorted by id. Includes `a` or `b`
    /// themselves when one is-a the other.
    pub fn common_ancestors(&self, a: impl TypeKey, b: impl TypeKey) -> Vec<TypeId> {
        match (self.key(&a), self.key(&b)) {
            (Some(a), Some(b)) => self.hierarchy.graph().common_ancestors(a, b),
            _ => Vec::new(),
        }
    }

    pub fn most_specific_common_ancestors(&self, a: impl TypeKey, b: impl TypeKey) -> Vec<TypeId> {
        match (self.key(&a), self.key(&b)) {
            (Some(a), Some(b)) => self.hierarchy.graph().most_specific_common_ancestors(a, b),
            _ => Vec::new(),
        }
    }

    /// Strict ancestors, sorted by id.
    pub fn ancestors(&self, ty: impl TypeKey) -> &[TypeId] {
        self.key(&ty)
            .map(|id| self.hierarchy.graph().ancestors(id))
            .unwrap_or_default()
    }

    /// Strict descendants, sorted by id.
    pub fn descendants(&self, ty: impl TypeKey) -> &[TypeId] {
        self.key(&ty)
            .map(|id| self.hierarchy.graph().descendants(id))
            .unwrap_or_default()
    }

    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.hierarchy.name(id)
    }

    pub fn record(&self, ty: impl TypeKey) -> Option<&TypeRecord> {
        self.key(&ty).and_then(|id| self.hierarchy.record(id))
    }

    /// Names for a list of ids, skipping unknown ones.
    pub fn names<'a>(&'a self, ids: &'a [TypeId]) -> impl Iterator<Item = &'a str> + 'a {
        ids.iter().filter_map(|&id| self.hierarchy.name(id))
    }

    fn key(&self, key: &impl TypeKey) -> Option<TypeId> {
        key.resolve_in(&self.hierarchy)
    }
}
