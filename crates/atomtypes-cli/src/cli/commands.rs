//! Command builders for the CLI.
//!
//! Every command loads the same module set, so all of them share the
//! module flags.

use clap::Command;

use super::args::*;

/// Add the module loading flags.
fn with_module_args(cmd: Command) -> Command {
    cmd.arg(module_arg())
        .arg(no_builtin_arg())
        .arg(allow_redeclaration_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("atomtypes")
        .about("Inspect and query atom type hierarchies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(is_a_command())
        .subcommand(ancestors_command())
        .subcommand(common_command())
}

/// Register all modules and report the first error.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Register all modules and report errors")
        .after_help(
            r#"EXAMPLES:
  atomtypes check                           # built-in modules only
  atomtypes check -m spacetime.types        # plus a module file
  atomtypes check --no-builtin -m a.json    # only the given file"#,
        );

    with_module_args(cmd)
}

/// Print the frozen hierarchy.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the type hierarchy")
        .after_help(
            r#"EXAMPLES:
  atomtypes dump                            # indented tree
  atomtypes dump --format script            # one script per module
  atomtypes dump --format json -m x.types   # JSON declaration feeds"#,
        )
        .arg(format_arg())
        .arg(color_arg());

    with_module_args(cmd)
}

/// Subtype check.
pub fn is_a_command() -> Command {
    let cmd = Command::new("is-a")
        .about("Check whether one type is-a another (exit status 1 if not)")
        .arg(type_arg("subtype", "TYPE", "Candidate subtype"))
        .arg(type_arg("supertype", "SUPERTYPE", "Expected supertype"));

    with_module_args(cmd)
}

/// Ancestor or descendant listing.
pub fn ancestors_command() -> Command {
    let cmd = Command::new("ancestors")
        .about("List the ancestors of a type")
        .arg(type_arg("type", "TYPE", "Type name"))
        .arg(descendants_arg());

    with_module_args(cmd)
}

/// Common ancestor listing.
pub fn common_command() -> Command {
    let cmd = Command::new("common")
        .about("List the common ancestors of two types")
        .arg(type_arg("first", "A", "First type"))
        .arg(type_arg("second", "B", "Second type"))
        .arg(most_specific_arg());

    with_module_args(cmd)
}
