//! Registration order for a set of modules.
//!
//! Modules name their dependencies; the schedule puts every module after
//! the modules it depends on. Among modules that are ready at the same
//! time, input order wins, so the result is deterministic.

use std::collections::HashSet;

use indexmap::IndexMap;

use atomtypes_core::ModuleDeclarations;

use crate::error::ScheduleError;
use crate::scc::{is_cyclic, strongly_connected};

/// Order `modules` dependencies-first.
///
/// `registered` reports modules that are already registered; depending on
/// one of those is fine even if it is not in `modules`.
pub fn schedule<'m>(
    modules: &'m [ModuleDeclarations],
    registered: impl Fn(&str) -> bool,
) -> Result<Vec<&'m ModuleDeclarations>, ScheduleError> {
    let mut by_name: IndexMap<&str, &ModuleDeclarations> = IndexMap::with_capacity(modules.len());
    for module in modules {
        if by_name.insert(&module.module, module).is_some() {
            return Err(ScheduleError::DuplicateModule(module.module.clone()));
        }
    }

    for module in modules {
        for dependency in &module.depends {
            if !by_name.contains_key(dependency.as_str()) && !registered(dependency) {
                return Err(ScheduleError::UnknownDependency {
                    module: module.module.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    // Edges only between modules of this set.
    let graph: IndexMap<&str, Vec<&str>> = modules
        .iter()
        .map(|module| {
            let local = module
                .depends
                .iter()
                .map(String::as_str)
                .filter(|d| by_name.contains_key(*d))
                .collect();
            (module.module.as_str(), local)
        })
        .collect();

    if let Some(mut cycle) = strongly_connected(&graph)
        .into_iter()
        .find(|scc| is_cyclic(&graph, scc))
    {
        cycle.sort_by_key(|name| by_name.get_index_of(*name));
        return Err(ScheduleError::DependencyCycle {
            modules: cycle.into_iter().map(str::to_owned).collect(),
        });
    }

    let mut placed: HashSet<&str> = HashSet::with_capacity(modules.len());
    let mut order = Vec::with_capacity(modules.len());
    while order.len() < modules.len() {
        let next = graph
            .iter()
            .find(|(name, deps)| !placed.contains(*name) && deps.iter().all(|d| placed.contains(d)));
        // Acyclic, so some module is always ready.
        let Some((&name, _)) = next else {
            break;
        };
        placed.insert(name);
        order.push(by_name[name]);
    }

    Ok(order)
}
