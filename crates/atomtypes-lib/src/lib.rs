//! atomtypes: staged multiple-inheritance type hierarchy for hypergraph atoms.
//!
//! Modules register their type declarations during start-up; the first
//! query freezes the hierarchy, and from then on it is read-only and
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use atomtypes_lib::{ModuleDeclarations, TypeSystem};
//!
//! let system = TypeSystem::new();
//! system
//!     .register_module(&ModuleDeclarations::new("m1").declare_root("Atom"))
//!     .unwrap();
//! system
//!     .register_module(
//!         &ModuleDeclarations::new("m2")
//!             .depends_on("m1")
//!             .declare("Node", ["Atom"])
//!             .declare("Link", ["Atom"])
//!             .declare("PatternLink", ["Link", "Node"]),
//!     )
//!     .unwrap();
//!
//! let types = system.query();
//! assert!(types.is_a("PatternLink", "Atom"));
//! assert!(!types.is_a("Node", "Link"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
mod graph;
mod hierarchy;
pub mod modules;
mod query;
mod registrar;
mod scc;
mod schedule;
mod system;
mod table;

pub use atomtypes_core::{
    CanonicalId, DeclarationError, ModuleDeclarations, ModuleId, TypeDeclaration, TypeId,
};
pub use error::{GraphError, RegistrationError, ScheduleError};
pub use graph::InheritanceGraph;
pub use hierarchy::Hierarchy;
pub use query::{Tagged, TypeKey, TypeQueryFacade, Typed};
pub use registrar::{ModuleRegistrar, ModuleReport, RegistrarConfig};
pub use schedule::schedule;
pub use system::TypeSystem;
pub use table::{TypeRecord, TypeTable};

/// Any error the type system can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod query_tests;
#[cfg(test)]
mod schedule_tests;
