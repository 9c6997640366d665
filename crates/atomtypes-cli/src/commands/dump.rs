use std::collections::HashSet;
use std::fmt::Write as _;

use atomtypes_lib::{Hierarchy, TypeId};

use super::loader::{ModuleOptions, load_or_exit};
use crate::colors::Colors;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Tree,
    Script,
    Json,
}

pub struct DumpArgs {
    pub modules: ModuleOptions,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let types = load_or_exit(&args.modules);
    let hierarchy = types.hierarchy();

    match args.format {
        DumpFormat::Tree => print!("{}", render_tree(hierarchy, Colors::new(args.color))),
        DumpFormat::Script => print!("{}", render_scripts(hierarchy)),
        DumpFormat::Json => {
            let batches = hierarchy.to_declarations();
            let json = serde_json::to_string_pretty(&batches).expect("serialization should not fail");
            println!("{}", json);
        }
    }
}

/// One script per module, separated by a blank line.
pub fn render_scripts(hierarchy: &Hierarchy) -> String {
    hierarchy
        .to_declarations()
        .iter()
        .map(|batch| batch.to_script())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented tree from the roots down.
///
/// A type with several parents shows up under each of them, with its full
/// parent list; its children are only expanded the first time.
pub fn render_tree(hierarchy: &Hierarchy, colors: Colors) -> String {
    let mut out = String::new();
    let mut expanded = HashSet::new();
    for root in hierarchy.roots() {
        render_node(hierarchy, root.id, 0, colors, &mut expanded, &mut out);
    }
    out
}

fn render_node(
    hierarchy: &Hierarchy,
    id: TypeId,
    indent: usize,
    colors: Colors,
    expanded: &mut HashSet<TypeId>,
    out: &mut String,
) {
    let Some(record) = hierarchy.record(id) else {
        return;
    };
    let children = hierarchy.graph().children(id);
    let first_visit = expanded.insert(id);

    let _ = write!(
        out,
        "{:indent$}{}{}{}",
        "",
        colors.blue,
        record.name,
        colors.reset,
        indent = indent * 2
    );
    if record.parents.len() > 1 {
        let parents: Vec<&str> = record
            .parents
            .iter()
            .filter_map(|&p| hierarchy.name(p))
            .collect();
        let _ = write!(out, " {}<- {}{}", colors.dim, parents.join(", "), colors.reset);
    }
    if !first_visit && !children.is_empty() {
        let _ = write!(out, " {}...{}", colors.dim, colors.reset);
    }
    out.push('\n');

    if first_visit {
        for &child in children {
            render_node(hierarchy, child, indent + 1, colors, expanded, out);
        }
    }
}
