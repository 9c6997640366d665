//! Transactional module registration.
//!
//! A batch is validated in full against the committed hierarchy before
//! anything is written. Either every declaration of a module commits or
//! none does.

use std::collections::HashSet;

use indexmap::IndexMap;

use atomtypes_core::utils::is_valid_type_name;
use atomtypes_core::{ModuleDeclarations, ModuleId, TypeDeclaration, TypeId};

use crate::error::{GraphError, RegistrationError};
use crate::graph::InheritanceGraph;
use crate::hierarchy::Hierarchy;
use crate::scc::{is_cyclic, strongly_connected};
use crate::table::TypeTable;

/// Registration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrarConfig {
    /// Accept a cross-module redeclaration when the parent set is
    /// identical, instead of failing with `NameConflict`.
    pub allow_identical_redeclaration: bool,
    /// Upper bound on the total number of types.
    pub max_types: u32,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            allow_identical_redeclaration: false,
            max_types: u32::MAX,
        }
    }
}

impl RegistrarConfig {
    pub fn allow_identical_redeclaration(mut self, allow: bool) -> Self {
        self.allow_identical_redeclaration = allow;
        self
    }

    pub fn max_types(mut self, max: u32) -> Self {
        self.max_types = max;
        self
    }
}

/// What a successful registration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    pub module: String,
    pub module_id: ModuleId,
    /// Newly committed types in declaration order.
    pub added: Vec<TypeId>,
    /// Benign redeclarations that were accepted without a new id.
    pub skipped: Vec<String>,
}

/// Owns the table and graph for the registration phase.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistrar {
    config: RegistrarConfig,
    table: TypeTable,
    graph: InheritanceGraph,
    /// Registered modules, indexed by ModuleId.
    modules: IndexMap<String, ModuleId>,
}

/// Validated batch: declarations to commit plus accepted redeclarations.
struct Plan<'b> {
    pending: Vec<&'b TypeDeclaration>,
    skipped: Vec<String>,
}

impl ModuleRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistrarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> RegistrarConfig {
        self.config
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    pub fn graph(&self) -> &InheritanceGraph {
        &self.graph
    }

    pub fn is_registered(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Registered module names in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn module_name(&self, id: ModuleId) -> Option<&str> {
        self.modules.get_index(id.index()).map(|(name, _)| name.as_str())
    }

    /// Validate and commit one module's declarations.
    pub fn register_module(
        &mut self,
        batch: &ModuleDeclarations,
    ) -> Result<ModuleReport, RegistrationError> {
        let result = self.validate(batch).and_then(|plan| self.commit(batch, plan));
        match &result {
            Ok(report) => tracing::debug!(
                module = %report.module,
                added = report.added.len(),
                skipped = report.skipped.len(),
                "module registered"
            ),
            Err(err) => tracing::warn!(module = %batch.module, %err, "module rejected"),
        }
        result
    }

    /// End the registration phase.
    pub fn freeze(self) -> Hierarchy {
        let modules = self.modules.into_keys().collect();
        Hierarchy::new(self.table, self.graph, modules)
    }

    fn validate<'b>(&self, batch: &'b ModuleDeclarations) -> Result<Plan<'b>, RegistrationError> {
        let module = batch.module.as_str();

        if self.is_registered(module) {
            return Err(RegistrationError::ModuleAlreadyRegistered {
                module: module.to_owned(),
            });
        }

        for dependency in &batch.depends {
            if !self.is_registered(dependency) {
                return Err(RegistrationError::MissingDependency {
                    module: module.to_owned(),
                    dependency: dependency.clone(),
                });
            }
        }

        for decl in &batch.types {
            if !is_valid_type_name(&decl.name) {
                return Err(RegistrationError::InvalidName {
                    name: decl.name.clone(),
                    module: module.to_owned(),
                });
            }
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(batch.types.len());
        for decl in &batch.types {
            if !seen.insert(&decl.name) {
                return Err(RegistrationError::DuplicateDeclaration {
                    name: decl.name.clone(),
                    module: module.to_owned(),
                });
            }
        }

        let mut plan = Plan {
            pending: Vec::with_capacity(batch.types.len()),
            skipped: Vec::new(),
        };
        for decl in &batch.types {
            let Some(existing) = self.table.lookup_by_name(&decl.name) else {
                plan.pending.push(decl);
                continue;
            };
            if self.config.allow_identical_redeclaration && self.same_parents(existing, decl) {
                plan.skipped.push(decl.name.clone());
                continue;
            }
            let existing_module = self
                .table
                .lookup_by_id(existing)
                .and_then(|record| self.module_name(record.module))
                .unwrap_or_default();
            return Err(RegistrationError::NameConflict {
                name: decl.name.clone(),
                existing_module: existing_module.to_owned(),
                new_module: module.to_owned(),
            });
        }

        // Position of each pending declaration in the batch.
        let positions: IndexMap<&str, usize> = plan
            .pending
            .iter()
            .enumerate()
            .map(|(pos, decl)| (decl.name.as_str(), pos))
            .collect();

        for decl in &plan.pending {
            for parent in &decl.parents {
                let known = self.table.lookup_by_name(parent).is_some()
                    || positions.contains_key(parent.as_str());
                if !known {
                    return Err(unresolved(parent, &decl.name));
                }
            }
        }

        self.check_cycles(&plan.pending, &positions)?;

        for (pos, decl) in plan.pending.iter().enumerate() {
            for parent in &decl.parents {
                if positions.get(parent.as_str()).is_some_and(|&p| p > pos) {
                    return Err(unresolved(parent, &decl.name));
                }
            }
        }

        if self.table.len() + plan.pending.len() > self.config.max_types as usize {
            return Err(RegistrationError::CapacityExceeded {
                module: module.to_owned(),
                limit: self.config.max_types,
            });
        }

        Ok(plan)
    }

    /// Reject batches whose in-batch parent edges form a cycle.
    ///
    /// Committed types cannot take part: their ancestry is fixed and never
    /// points into the batch.
    fn check_cycles(
        &self,
        pending: &[&TypeDeclaration],
        positions: &IndexMap<&str, usize>,
    ) -> Result<(), RegistrationError> {
        let graph: IndexMap<&str, Vec<&str>> = pending
            .iter()
            .map(|decl| {
                let local = decl
                    .parents
                    .iter()
                    .map(String::as_str)
                    .filter(|p| positions.contains_key(*p))
                    .collect();
                (decl.name.as_str(), local)
            })
            .collect();

        let cycle = strongly_connected(&graph)
            .into_iter()
            .filter(|scc| is_cyclic(&graph, scc))
            .min_by_key(|scc| scc.iter().map(|n| positions[*n]).min());

        match cycle {
            Some(mut names) => {
                names.sort_by_key(|n| positions[*n]);
                Err(RegistrationError::CycleDetected {
                    participating_names: names.into_iter().map(str::to_owned).collect(),
                })
            }
            None => Ok(()),
        }
    }

    fn commit(
        &mut self,
        batch: &ModuleDeclarations,
        plan: Plan<'_>,
    ) -> Result<ModuleReport, RegistrationError> {
        let module_id = ModuleId::from_raw(self.modules.len() as u32);
        let mark = self.table.len();

        let mut added = Vec::with_capacity(plan.pending.len());
        for decl in &plan.pending {
            let id = self.table.declare(&decl.name, module_id);
            let node = self.graph.add_node();
            debug_assert_eq!(id, node);
            added.push(id);
        }

        for (&id, decl) in added.iter().zip(&plan.pending) {
            if let Err(err) = self.link(id, decl) {
                self.rollback(mark);
                return Err(err);
            }
        }

        self.modules.insert(batch.module.clone(), module_id);
        Ok(ModuleReport {
            module: batch.module.clone(),
            module_id,
            added,
            skipped: plan.skipped,
        })
    }

    /// Add the parent edges of a freshly declared type and fix its lineage.
    fn link(&mut self, id: TypeId, decl: &TypeDeclaration) -> Result<(), RegistrationError> {
        let mut parents: Vec<TypeId> = Vec::with_capacity(decl.parents.len());
        let mut depth = 0;

        for parent in &decl.parents {
            let Some(parent_id) = self.table.lookup_by_name(parent) else {
                return Err(unresolved(parent, &decl.name));
            };
            if parents.contains(&parent_id) {
                continue;
            }
            self.graph
                .add_parent(id, parent_id)
                .map_err(|err| match err {
                    GraphError::CycleDetected { .. } => RegistrationError::CycleDetected {
                        participating_names: vec![decl.name.clone(), parent.clone()],
                    },
                    GraphError::UnknownType(_) => unresolved(parent, &decl.name),
                })?;
            let parent_depth = self.table.lookup_by_id(parent_id).map_or(0, |r| r.depth);
            depth = depth.max(parent_depth + 1);
            parents.push(parent_id);
        }

        self.table.set_lineage(id, parents.into_boxed_slice(), depth);
        Ok(())
    }

    fn rollback(&mut self, len: usize) {
        self.table.truncate(len);
        self.graph.truncate(len);
    }

    fn same_parents(&self, existing: TypeId, decl: &TypeDeclaration) -> bool {
        let Some(record) = self.table.lookup_by_id(existing) else {
            return false;
        };
        let mut committed: Vec<&str> = record.parents.iter().map(|&p| self.table.name(p)).collect();
        let mut declared: Vec<&str> = decl.parents.iter().map(String::as_str).collect();
        committed.sort_unstable();
        declared.sort_unstable();
        declared.dedup();
        committed == declared
    }
}

fn unresolved(parent: &str, child: &str) -> RegistrationError {
    RegistrationError::UnresolvedParent {
        name: parent.to_owned(),
        child: child.to_owned(),
    }
}
