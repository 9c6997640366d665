//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ancestors::AncestorsArgs;
use crate::commands::check::CheckArgs;
use crate::commands::common::CommonArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::is_a::IsAArgs;
use crate::commands::loader::ModuleOptions;

/// Module loading flags shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParams {
    pub modules: Vec<PathBuf>,
    pub no_builtin: bool,
    pub allow_redeclaration: bool,
}

impl ModuleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            modules: m
                .get_many::<PathBuf>("module")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            no_builtin: m.get_flag("no_builtin"),
            allow_redeclaration: m.get_flag("allow_redeclaration"),
        }
    }
}

impl From<ModuleParams> for ModuleOptions {
    fn from(p: ModuleParams) -> Self {
        Self {
            files: p.modules,
            builtin: !p.no_builtin,
            allow_redeclaration: p.allow_redeclaration,
        }
    }
}

pub struct CheckParams {
    pub modules: ModuleParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            modules: ModuleParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            modules: p.modules.into(),
        }
    }
}

pub struct DumpParams {
    pub modules: ModuleParams,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("script") => DumpFormat::Script,
            Some("json") => DumpFormat::Json,
            _ => DumpFormat::Tree,
        };

        Self {
            modules: ModuleParams::from_matches(m),
            format,
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            modules: p.modules.into(),
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct IsAParams {
    pub modules: ModuleParams,
    pub subtype: String,
    pub supertype: String,
}

impl IsAParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            modules: ModuleParams::from_matches(m),
            subtype: required(m, "subtype"),
            supertype: required(m, "supertype"),
        }
    }
}

impl From<IsAParams> for IsAArgs {
    fn from(p: IsAParams) -> Self {
        Self {
            modules: p.modules.into(),
            subtype: p.subtype,
            supertype: p.supertype,
        }
    }
}

pub struct AncestorsParams {
    pub modules: ModuleParams,
    pub type_name: String,
    pub descendants: bool,
}

impl AncestorsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            modules: ModuleParams::from_matches(m),
            type_name: required(m, "type"),
            descendants: m.get_flag("descendants"),
        }
    }
}

impl From<AncestorsParams> for AncestorsArgs {
    fn from(p: AncestorsParams) -> Self {
        Self {
            modules: p.modules.into(),
            type_name: p.type_name,
            descendants: p.descendants,
        }
    }
}

pub struct CommonParams {
    pub modules: ModuleParams,
    pub first: String,
    pub second: String,
    pub most_specific: bool,
}

impl CommonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            modules: ModuleParams::from_matches(m),
            first: required(m, "first"),
            second: required(m, "second"),
            most_specific: m.get_flag("most_specific"),
        }
    }
}

impl From<CommonParams> for CommonArgs {
    fn from(p: CommonParams) -> Self {
        Self {
            modules: p.modules.into(),
            first: p.first,
            second: p.second,
            most_specific: p.most_specific,
        }
    }
}

/// Log level from `-v` count.
pub fn verbosity(m: &ArgMatches) -> &'static str {
    match m.get_count("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Required positionals are enforced by clap.
fn required(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}
