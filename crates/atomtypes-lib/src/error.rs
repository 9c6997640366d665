use atomtypes_core::TypeId;

/// Why a module's batch was rejected.
///
/// A rejected batch leaves the hierarchy exactly as it was before the call.
/// None of these are transient; retrying the same batch fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("type `{name}` is already declared by module `{existing_module}` (redeclared by `{new_module}`)")]
    NameConflict {
        name: String,
        existing_module: String,
        new_module: String,
    },

    #[error("parent `{name}` of `{child}` is not declared before it")]
    UnresolvedParent { name: String, child: String },

    #[error("inheritance cycle between {}", format_names(.participating_names))]
    CycleDetected { participating_names: Vec<String> },

    #[error("hierarchy is frozen; module `{module}` registered too late")]
    HierarchyFrozen { module: String },

    #[error("invalid type name {name:?} in module `{module}`")]
    InvalidName { name: String, module: String },

    #[error("type `{name}` is declared twice in module `{module}`")]
    DuplicateDeclaration { name: String, module: String },

    #[error("module `{module}` is already registered")]
    ModuleAlreadyRegistered { module: String },

    #[error("module `{module}` depends on `{dependency}`, which is not registered")]
    MissingDependency { module: String, dependency: String },

    #[error("module `{module}` would exceed the limit of {limit} types")]
    CapacityExceeded { module: String, limit: u32 },
}

impl RegistrationError {
    /// The type name the error is about, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NameConflict { name, .. }
            | Self::UnresolvedParent { name, .. }
            | Self::InvalidName { name, .. }
            | Self::DuplicateDeclaration { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Rejected graph mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {child} -> {parent} would close a cycle")]
    CycleDetected { child: TypeId, parent: TypeId },

    #[error("type {0} is not in the graph")]
    UnknownType(TypeId),
}

/// Module set that cannot be put in registration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("module `{0}` appears more than once")]
    DuplicateModule(String),

    #[error("module `{module}` depends on unknown module `{dependency}`")]
    UnknownDependency { module: String, dependency: String },

    #[error("module dependency cycle between {}", format_names(.modules))]
    DependencyCycle { modules: Vec<String> },
}

fn format_names(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
