//! Name ↔ id mapping for committed types.
//!
//! The table owns type identity. Ids are handed out densely in declaration
//! order and a name always maps to the same id.

use std::collections::HashMap;

use atomtypes_core::{ModuleId, TypeId};

/// Everything known about one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub id: TypeId,
    pub name: String,
    /// Direct parents, deduplicated, in declaration order.
    pub parents: Box<[TypeId]>,
    /// Longest path to a root. Roots have depth 0.
    pub depth: u32,
    pub module: ModuleId,
}

impl TypeRecord {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    /// Map from name to id for deduplication.
    by_name: HashMap<String, TypeId>,
    /// Records, indexed by TypeId.
    records: Vec<TypeRecord>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type, returning its id.
    /// If the name is already declared, returns the existing id.
    pub fn declare(&mut self, name: &str, module: ModuleId) -> TypeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = TypeId::from_raw(self.records.len() as u32);
        self.records.push(TypeRecord {
            id,
            name: name.to_owned(),
            parents: Box::default(),
            depth: 0,
            module,
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    #[inline]
    pub fn lookup_by_name(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn lookup_by_id(&self, id: TypeId) -> Option<&TypeRecord> {
        self.records.get(id.index())
    }

    /// Resolve an id back to its name.
    ///
    /// # Panics
    /// Panics if the id was not allocated by this table.
    #[inline]
    pub fn name(&self, id: TypeId) -> &str {
        &self.records[id.index()].name
    }

    #[inline]
    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.records.len()
    }

    /// Number of declared names. Equal to `len`, since ids are dense.
    #[inline]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.records.iter()
    }

    /// Records, indexed by TypeId.
    #[inline]
    pub fn records(&self) -> &[TypeRecord] {
        &self.records
    }

    /// Fill in parents and depth of a freshly declared record.
    pub(crate) fn set_lineage(&mut self, id: TypeId, parents: Box<[TypeId]>, depth: u32) {
        let record = &mut self.records[id.index()];
        record.parents = parents;
        record.depth = depth;
    }

    /// Drop every record with an id `>= len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        for record in self.records.drain(len.min(self.records.len())..) {
            self.by_name.remove(&record.name);
        }
    }
}
