//! Registration → query latch.
//!
//! A `TypeSystem` starts in the registration phase. The first query (or an
//! explicit `finalize`) freezes it for good; registration after that fails
//! fast with `HierarchyFrozen`.

use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::Mutex;

use atomtypes_core::ModuleDeclarations;

use crate::Error;
use crate::error::RegistrationError;
use crate::hierarchy::Hierarchy;
use crate::query::TypeQueryFacade;
use crate::registrar::{ModuleRegistrar, ModuleReport, RegistrarConfig};
use crate::schedule::schedule;

static GLOBAL: LazyLock<TypeSystem> = LazyLock::new(TypeSystem::new);

#[derive(Debug)]
pub struct TypeSystem {
    /// `None` once frozen. Serializes registration.
    registrar: Mutex<Option<ModuleRegistrar>>,
    /// Set exactly once, at freeze. Queries read it without locking.
    frozen: OnceLock<Arc<Hierarchy>>,
}

impl TypeSystem {
    pub fn new() -> Self {
        Self::with_config(RegistrarConfig::default())
    }

    pub fn with_config(config: RegistrarConfig) -> Self {
        Self {
            registrar: Mutex::new(Some(ModuleRegistrar::with_config(config))),
            frozen: OnceLock::new(),
        }
    }

    /// The process-wide instance used by the built-in module initializers.
    pub fn global() -> &'static TypeSystem {
        &GLOBAL
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    pub fn register_module(
        &self,
        batch: &ModuleDeclarations,
    ) -> Result<ModuleReport, RegistrationError> {
        let mut registrar = self.registrar.lock();
        match registrar.as_mut() {
            Some(registrar) => registrar.register_module(batch),
            None => Err(frozen(&batch.module)),
        }
    }

    /// Register a set of modules, dependencies first.
    ///
    /// Modules registered before a failure stay registered.
    pub fn register_all(&self, modules: &[ModuleDeclarations]) -> Result<Vec<ModuleReport>, Error> {
        let mut guard = self.registrar.lock();
        let Some(registrar) = guard.as_mut() else {
            let module = modules.first().map_or("", |m| m.module.as_str());
            return Err(frozen(module).into());
        };

        let order = schedule(modules, |name| registrar.is_registered(name))?;
        let mut reports = Vec::with_capacity(order.len());
        for batch in order {
            reports.push(registrar.register_module(batch)?);
        }
        Ok(reports)
    }

    /// Freeze now. Idempotent.
    pub fn finalize(&self) -> Arc<Hierarchy> {
        let hierarchy = self.frozen.get_or_init(|| {
            let registrar = self.registrar.lock().take().unwrap_or_default();
            let hierarchy = registrar.freeze();
            tracing::info!(
                types = hierarchy.len(),
                modules = hierarchy.module_count(),
                "type hierarchy frozen"
            );
            Arc::new(hierarchy)
        });
        Arc::clone(hierarchy)
    }

    /// Query handle. Freezes the hierarchy on first use.
    pub fn query(&self) -> TypeQueryFacade {
        TypeQueryFacade::new(self.finalize())
    }
}

impl Default for TypeSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn frozen(module: &str) -> RegistrationError {
    tracing::warn!(module, "registration after freeze");
    RegistrationError::HierarchyFrozen {
        module: module.to_owned(),
    }
}
