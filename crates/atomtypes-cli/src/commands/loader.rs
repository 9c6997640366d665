//! Module set loading shared by all commands.

use std::path::{Path, PathBuf};

use atomtypes_core::{DeclarationError, ModuleDeclarations};
use atomtypes_lib::{RegistrarConfig, TypeQueryFacade, TypeSystem, modules};

/// Which modules to load and how to register them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    pub files: Vec<PathBuf>,
    pub builtin: bool,
    pub allow_redeclaration: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Declaration {
        path: PathBuf,
        source: DeclarationError,
    },

    #[error(transparent)]
    Types(#[from] atomtypes_lib::Error),
}

/// Read one module file. `.json` files use the JSON feed format, anything
/// else is a declaration script named after the file stem.
pub fn load_module_file(path: &Path) -> Result<ModuleDeclarations, LoadError> {
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let parsed = if path.extension().is_some_and(|ext| ext == "json") {
        ModuleDeclarations::from_json(&src)
    } else {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        ModuleDeclarations::from_script(&stem, &src)
    };

    parsed.map_err(|source| LoadError::Declaration {
        path: path.to_owned(),
        source,
    })
}

/// Load, schedule and register every module, then freeze.
pub fn load(options: &ModuleOptions) -> Result<TypeQueryFacade, LoadError> {
    let mut batches: Vec<ModuleDeclarations> = Vec::new();
    if options.builtin {
        batches.extend(modules::all().into_iter().cloned());
    }
    for path in &options.files {
        batches.push(load_module_file(path)?);
    }

    let config = RegistrarConfig::default().allow_identical_redeclaration(options.allow_redeclaration);
    let system = TypeSystem::with_config(config);
    let reports = system.register_all(&batches)?;
    tracing::info!(modules = reports.len(), "modules loaded");

    Ok(system.query())
}

/// Print an error and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Load or exit.
pub fn load_or_exit(options: &ModuleOptions) -> TypeQueryFacade {
    load(options).unwrap_or_else(|err| fail(err))
}
