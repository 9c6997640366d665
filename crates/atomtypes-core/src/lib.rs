#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data for the atomtypes hierarchy.
//!
//! - **Handles**: `TypeId`, `ModuleId`, `CanonicalId`
//! - **Declaration feeds**: `ModuleDeclarations` built in code, parsed from
//!   a line-oriented script, or deserialized from JSON
//!
//! Nothing here knows about registration; see `atomtypes-lib`.

mod declaration;
mod error;
mod ids;
mod json;
pub mod script;
pub mod utils;

pub use declaration::{ModuleDeclarations, TypeDeclaration};
pub use error::DeclarationError;
pub use ids::{CanonicalId, ModuleId, TypeId};

/// Parse a declaration script. Shorthand for [`ModuleDeclarations::from_script`].
pub fn parse_script(default_module: &str, src: &str) -> Result<ModuleDeclarations, DeclarationError> {
    ModuleDeclarations::from_script(default_module, src)
}

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod script_tests;
