//! The frozen hierarchy.
//!
//! Nothing here takes `&mut self`. Closure caches inside the graph are
//! `OnceLock`s, so a `Hierarchy` can be shared across threads as is.

use atomtypes_core::{CanonicalId, ModuleDeclarations, ModuleId, TypeDeclaration, TypeId};

use crate::graph::InheritanceGraph;
use crate::table::{TypeRecord, TypeTable};

#[derive(Debug)]
pub struct Hierarchy {
    table: TypeTable,
    graph: InheritanceGraph,
    /// Module names, indexed by ModuleId.
    modules: Box<[String]>,
    /// Canonical id of each type, indexed by TypeId.
    canonical: Box<[CanonicalId]>,
    /// Type at each canonical position.
    by_canonical: Box<[TypeId]>,
}

impl Hierarchy {
    pub(crate) fn new(table: TypeTable, graph: InheritanceGraph, modules: Vec<String>) -> Self {
        // Order by (depth, name): independent of module load order.
        let records = table.records();
        let mut by_canonical: Vec<TypeId> = records.iter().map(|record| record.id).collect();
        by_canonical.sort_by_key(|id| {
            let record = &records[id.index()];
            (record.depth, record.name.as_str())
        });

        let mut canonical = vec![CanonicalId::from_raw(0); by_canonical.len()];
        for (pos, id) in by_canonical.iter().enumerate() {
            canonical[id.index()] = CanonicalId::from_raw(pos as u32);
        }

        Self {
            table,
            graph,
            modules: modules.into_boxed_slice(),
            canonical: canonical.into_boxed_slice(),
            by_canonical: by_canonical.into_boxed_slice(),
        }
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    pub fn graph(&self) -> &InheritanceGraph {
        &self.graph
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        self.table.lookup_by_name(name)
    }

    pub fn record(&self, id: TypeId) -> Option<&TypeRecord> {
        self.table.lookup_by_id(id)
    }

    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.record(id).map(|record| record.name.as_str())
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.table.contains(id)
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.table.iter()
    }

    pub fn roots(&self) -> impl Iterator<Item = &TypeRecord> {
        self.table.iter().filter(|record| record.is_root())
    }

    pub fn module_name(&self, id: ModuleId) -> Option<&str> {
        self.modules.get(id.index()).map(String::as_str)
    }

    /// Module names in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Run-independent id of a type: its position in `(depth, name)` order.
    pub fn canonical_id(&self, id: TypeId) -> Option<CanonicalId> {
        self.canonical.get(id.index()).copied()
    }

    pub fn by_canonical(&self, id: CanonicalId) -> Option<TypeId> {
        self.by_canonical.get(id.index()).copied()
    }

    /// Types in canonical order.
    pub fn canonical_order(&self) -> impl Iterator<Item = &TypeRecord> {
        self.by_canonical
            .iter()
            .map(|&id| &self.table.records()[id.index()])
    }

    /// Rebuild one declaration batch per module, in registration order.
    ///
    /// Registering the result into an empty registrar reproduces this
    /// hierarchy with the same type ids.
    pub fn to_declarations(&self) -> Vec<ModuleDeclarations> {
        let mut batches: Vec<ModuleDeclarations> =
            self.modules.iter().map(ModuleDeclarations::new).collect();

        for record in self.table.iter() {
            let parents = record.parents.iter().map(|&p| self.table.name(p));
            let decl = TypeDeclaration::new(record.name.as_str(), parents);
            if let Some(batch) = batches.get_mut(record.module.index()) {
                batch.push(decl);
            }
        }

        // Recover dependencies from cross-module parents.
        for record in self.table.iter() {
            for &parent in record.parents.iter() {
                let Some(parent_record) = self.table.lookup_by_id(parent) else {
                    continue;
                };
                if parent_record.module == record.module {
                    continue;
                }
                let dependency = &self.modules[parent_record.module.index()];
                if let Some(batch) = batches.get_mut(record.module.index())
                    && !batch.depends.contains(dependency)
                {
                    batch.depends.push(dependency.clone());
                }
            }
        }

        batches
    }
}
