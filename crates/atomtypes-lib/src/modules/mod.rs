//! Built-in type modules.
//!
//! Each module is a declaration script under `types/`, embedded at compile
//! time and parsed on first use. `<module>_init()` registers it into
//! [`TypeSystem::global`]; the host calls these once, dependencies first.

use std::sync::LazyLock;

use atomtypes_core::ModuleDeclarations;

use crate::error::RegistrationError;
use crate::registrar::ModuleReport;
use crate::system::TypeSystem;

macro_rules! define_modules {
    (
        $(
            $fn_name:ident => {
                name: $name:literal,
                source: $source:literal $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            pub fn $fn_name() -> &'static ModuleDeclarations {
                static DECLS: LazyLock<ModuleDeclarations> = LazyLock::new(|| {
                    ModuleDeclarations::from_script($name, include_str!($source))
                        .unwrap_or_else(|err| panic!("built-in module `{}`: {err}", $name))
                });
                &DECLS
            }

            paste::paste! {
                #[doc = "Register `" $name "` into the global type system."]
                pub fn [<$fn_name _init>]() -> Result<ModuleReport, RegistrationError> {
                    TypeSystem::global().register_module($fn_name())
                }
            }
        )*

        pub fn from_name(s: &str) -> Option<&'static ModuleDeclarations> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    $name => Some($fn_name()),
                )*
                _ => None,
            }
        }

        /// All built-in modules, dependencies first.
        pub fn all() -> Vec<&'static ModuleDeclarations> {
            vec![
                $(
                    $fn_name(),
                )*
            ]
        }
    };
}

define_modules! {
    core_types => {
        name: "core",
        source: "../../types/core.types",
    },
    pattern_miner_types => {
        name: "pattern_miner",
        source: "../../types/pattern_miner.types",
    },
}
