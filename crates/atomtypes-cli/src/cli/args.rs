//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Extra module file (-m/--module), repeatable.
pub fn module_arg() -> Arg {
    Arg::new("module")
        .short('m')
        .long("module")
        .value_name("FILE")
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Load a module file (.types script or .json); repeatable")
}

/// Skip the built-in modules (--no-builtin).
pub fn no_builtin_arg() -> Arg {
    Arg::new("no_builtin")
        .long("no-builtin")
        .action(ArgAction::SetTrue)
        .help("Don't load the built-in core and pattern_miner modules")
}

/// Accept identical redeclarations (--allow-redeclaration).
pub fn allow_redeclaration_arg() -> Arg {
    Arg::new("allow_redeclaration")
        .long("allow-redeclaration")
        .action(ArgAction::SetTrue)
        .help("Accept a type redeclared by another module with identical parents")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output format for dump (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("tree")
        .value_parser(["tree", "script", "json"])
        .help("Output format")
}

/// A type name (positional).
pub fn type_arg(id: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id).value_name(value_name).required(true).help(help)
}

/// List descendants instead of ancestors (--descendants).
pub fn descendants_arg() -> Arg {
    Arg::new("descendants")
        .long("descendants")
        .short('d')
        .action(ArgAction::SetTrue)
        .help("List descendants instead of ancestors")
}

/// Keep only the most specific common ancestors (--most-specific).
pub fn most_specific_arg() -> Arg {
    Arg::new("most_specific")
        .long("most-specific")
        .action(ArgAction::SetTrue)
        .help("Only the tightest common generalizations")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for info, -vv for debug)")
}
