//! Strongly connected components over a name-keyed graph (Tarjan).
//!
//! Used for both type-level cycles inside a batch and module-level
//! dependency cycles. Edges to names missing from the graph are ignored.

use indexmap::{IndexMap, IndexSet};

/// Components in reverse topological order: a component only points at
/// components before it.
pub(crate) fn strongly_connected<'a>(graph: &IndexMap<&'a str, Vec<&'a str>>) -> Vec<Vec<&'a str>> {
    let mut finder = SccFinder {
        graph,
        index: 0,
        stack: Vec::new(),
        on_stack: IndexSet::new(),
        indices: IndexMap::new(),
        lowlinks: IndexMap::new(),
        sccs: Vec::new(),
    };

    for &name in graph.keys() {
        if !finder.indices.contains_key(name) {
            finder.strongconnect(name);
        }
    }

    finder.sccs
}

/// A component is cyclic if it has several members or a member that
/// points at itself.
pub(crate) fn is_cyclic(graph: &IndexMap<&str, Vec<&str>>, scc: &[&str]) -> bool {
    match scc {
        [single] => graph.get(single).is_some_and(|edges| edges.contains(single)),
        _ => scc.len() > 1,
    }
}

struct SccFinder<'g, 'a> {
    graph: &'g IndexMap<&'a str, Vec<&'a str>>,
    index: usize,
    stack: Vec<&'a str>,
    on_stack: IndexSet<&'a str>,
    indices: IndexMap<&'a str, usize>,
    lowlinks: IndexMap<&'a str, usize>,
    sccs: Vec<Vec<&'a str>>,
}

impl<'g, 'a> SccFinder<'g, 'a> {
    fn strongconnect(&mut self, name: &'a str) {
        self.indices.insert(name, self.index);
        self.lowlinks.insert(name, self.index);
        self.index += 1;
        self.stack.push(name);
        self.on_stack.insert(name);

        let graph = self.graph;
        for &next in graph.get(name).into_iter().flatten() {
            if !graph.contains_key(next) {
                continue;
            }
            if !self.indices.contains_key(next) {
                self.strongconnect(next);
                let next_lowlink = self.lowlinks[next];
                self.lower_lowlink(name, next_lowlink);
            } else if self.on_stack.contains(next) {
                let next_index = self.indices[next];
                self.lower_lowlink(name, next_index);
            }
        }

        if self.lowlinks[name] == self.indices[name] {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack.swap_remove(w);
                scc.push(w);
                if w == name {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }

    fn lower_lowlink(&mut self, name: &'a str, value: usize) {
        if let Some(lowlink) = self.lowlinks.get_mut(name) {
            *lowlink = (*lowlink).min(value);
        }
    }
}
