//! Is-a edges over type ids.
//!
//! Multiple inheritance makes ancestry a reachability closure, not a chain
//! walk. Closures are computed on first use and memoized per node; a
//! mutation drops the memoized closures of every node it can affect.
//!
//! Closures are stored sorted, so membership is a binary search.

use std::sync::OnceLock;

use atomtypes_core::TypeId;

use crate::error::GraphError;

#[derive(Debug, Clone, Default)]
struct Node {
    parents: Vec<TypeId>,
    children: Vec<TypeId>,
    /// Strict ancestors, sorted.
    ancestors: OnceLock<Box<[TypeId]>>,
    /// Strict descendants, sorted.
    descendants: OnceLock<Box<[TypeId]>>,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

impl Node {
    fn edges(&self, dir: Direction) -> &[TypeId] {
        match dir {
            Direction::Up => &self.parents,
            Direction::Down => &self.children,
        }
    }

    fn closure(&self, dir: Direction) -> &OnceLock<Box<[TypeId]>> {
        match dir {
            Direction::Up => &self.ancestors,
            Direction::Down => &self.descendants,
        }
    }

    fn invalidate(&mut self) {
        self.ancestors.take();
        self.descendants.take();
    }
}

#[derive(Debug, Clone, Default)]
pub struct InheritanceGraph {
    nodes: Vec<Node>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with no edges. Node ids follow table ids.
    pub fn add_node(&mut self) -> TypeId {
        let id = TypeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Record that `child` is-a `parent`.
    ///
    /// Refused if `child` is already reachable from `parent`, including
    /// `parent == child`. Adding an existing edge is a no-op. Ids that are
    /// not in the graph give `UnknownType`.
    pub fn add_parent(&mut self, child: TypeId, parent: TypeId) -> Result<(), GraphError> {
        for id in [child, parent] {
            if !self.contains(id) {
                return Err(GraphError::UnknownType(id));
            }
        }
        if self.is_subtype(parent, child) {
            return Err(GraphError::CycleDetected { child, parent });
        }
        if self.nodes[child.index()].parents.contains(&parent) {
            return Ok(());
        }

        // Nodes whose ancestor set grows, and nodes whose descendant set grows.
        let mut gains_ancestors = self.descendants(child).to_vec();
        gains_ancestors.push(child);
        let mut gains_descendants = self.ancestors(parent).to_vec();
        gains_descendants.push(parent);

        self.nodes[child.index()].parents.push(parent);
        self.nodes[parent.index()].children.push(child);

        for id in gains_ancestors {
            self.nodes[id.index()].ancestors.take();
        }
        for id in gains_descendants {
            self.nodes[id.index()].descendants.take();
        }
        Ok(())
    }

    /// `a` is `b` or a transitive descendant of `b`.
    ///
    /// Unknown ids are never subtypes of anything.
    pub fn is_subtype(&self, a: TypeId, b: TypeId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        a == b || self.ancestors(a).binary_search(&b).is_ok()
    }

    /// Direct parents in insertion order.
    pub fn parents(&self, id: TypeId) -> &[TypeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.parents.as_slice())
            .unwrap_or_default()
    }

    /// Direct children in insertion order.
    pub fn children(&self, id: TypeId) -> &[TypeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Strict ancestors of `id`, sorted by id.
    pub fn ancestors(&self, id: TypeId) -> &[TypeId] {
        self.closure(id, Direction::Up)
    }

    /// Strict descendants of `id`, sorted by id.
    pub fn descendants(&self, id: TypeId) -> &[TypeId] {
        self.closure(id, Direction::Down)
    }

    /// Types both `a` and `b` are subtypes of, sorted by id.
    ///
    /// Reflexive: if `a` is-a `b`, `b` itself is included.
    pub fn common_ancestors(&self, a: TypeId, b: TypeId) -> Vec<TypeId> {
        if !self.contains(a) || !self.contains(b) {
            return Vec::new();
        }
        let mut common: Vec<TypeId> = self
            .ancestors(a)
            .iter()
            .copied()
            .chain(std::iter::once(a))
            .filter(|&t| self.is_subtype(b, t))
            .collect();
        common.sort_unstable();
        common
    }

    /// The common ancestors that have no descendant among the common
    /// ancestors. These are the tightest generalizations of `a` and `b`.
    pub fn most_specific_common_ancestors(&self, a: TypeId, b: TypeId) -> Vec<TypeId> {
        let common = self.common_ancestors(a, b);
        common
            .iter()
            .copied()
            .filter(|&t| !common.iter().any(|&u| u != t && self.is_subtype(u, t)))
            .collect()
    }

    /// Memoized closure in one direction.
    ///
    /// Filled bottom-up with an explicit stack: a node's closure is built
    /// once the closures of all its neighbours are, so depth is not bounded
    /// by the call stack.
    fn closure(&self, id: TypeId, dir: Direction) -> &[TypeId] {
        let Some(node) = self.nodes.get(id.index()) else {
            return &[];
        };
        if let Some(closure) = node.closure(dir).get() {
            return closure;
        }

        let mut stack: Vec<(TypeId, usize)> = vec![(id, 0)];
        while let Some(top) = stack.last_mut() {
            let (current, next) = *top;
            let edges = self.nodes[current.index()].edges(dir);
            if let Some(&neighbour) = edges.get(next) {
                top.1 += 1;
                if self.nodes[neighbour.index()].closure(dir).get().is_none() {
                    stack.push((neighbour, 0));
                }
                continue;
            }

            stack.pop();
            let mut closure = Vec::new();
            for &neighbour in edges {
                closure.push(neighbour);
                if let Some(filled) = self.nodes[neighbour.index()].closure(dir).get() {
                    closure.extend_from_slice(filled);
                }
            }
            // A concurrent reader may have filled it first.
            let _ = self.nodes[current.index()].closure(dir).set(sorted_set(closure));
        }

        node.closure(dir).get().map(|closure| &**closure).unwrap_or_default()
    }

    /// Drop every node with an id `>= len` and every edge touching one.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
        let keep = |id: &TypeId| id.index() < len;
        for node in &mut self.nodes {
            node.parents.retain(keep);
            node.children.retain(keep);
            node.invalidate();
        }
    }
}

fn sorted_set(mut ids: Vec<TypeId>) -> Box<[TypeId]> {
    ids.sort_unstable();
    ids.dedup();
    ids.into_boxed_slice()
}
