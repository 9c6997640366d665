use atomtypes_core::TypeId;

use crate::error::GraphError;
use crate::graph::InheritanceGraph;

/// Atom(0); Node(1), Link(2) <- Atom; PatternLink(3) <- Link, Node.
fn diamond() -> (InheritanceGraph, [TypeId; 4]) {
    let mut graph = InheritanceGraph::new();
    let ids = [
        graph.add_node(),
        graph.add_node(),
        graph.add_node(),
        graph.add_node(),
    ];
    let [atom, node, link, pattern] = ids;
    graph.add_parent(node, atom).unwrap();
    graph.add_parent(link, atom).unwrap();
    graph.add_parent(pattern, link).unwrap();
    graph.add_parent(pattern, node).unwrap();
    (graph, ids)
}

#[test]
fn subtype_is_reflexive_and_transitive() {
    let (graph, [atom, node, link, pattern]) = diamond();

    for id in [atom, node, link, pattern] {
        assert!(graph.is_subtype(id, id));
    }
    assert!(graph.is_subtype(pattern, atom));
    assert!(graph.is_subtype(pattern, node));
    assert!(!graph.is_subtype(node, link));
    assert!(!graph.is_subtype(atom, node));
}

#[test]
fn closures_are_sorted_and_strict() {
    let (graph, [atom, node, link, pattern]) = diamond();

    assert_eq!(graph.ancestors(pattern), &[atom, node, link]);
    assert_eq!(graph.ancestors(atom), &[] as &[TypeId]);
    assert_eq!(graph.descendants(atom), &[node, link, pattern]);
    assert_eq!(graph.descendants(link), &[pattern]);
}

#[test]
fn direct_adjacency_keeps_insertion_order() {
    let (graph, [atom, node, link, pattern]) = diamond();

    assert_eq!(graph.parents(pattern), &[link, node]);
    assert_eq!(graph.children(atom), &[node, link]);
}

#[test]
fn common_ancestors_is_reflexive() {
    let (graph, [atom, node, link, pattern]) = diamond();

    assert_eq!(graph.common_ancestors(node, link), vec![atom]);
    assert_eq!(graph.common_ancestors(pattern, link), vec![atom, link]);
    assert_eq!(graph.common_ancestors(node, node), vec![atom, node]);
}

#[test]
fn most_specific_common_ancestors() {
    let (mut graph, [atom, node, link, pattern]) = diamond();
    let other = graph.add_node();
    graph.add_parent(other, link).unwrap();
    graph.add_parent(other, node).unwrap();

    assert_eq!(graph.common_ancestors(pattern, other), vec![atom, node, link]);
    assert_eq!(graph.most_specific_common_ancestors(pattern, other), vec![node, link]);
    assert_eq!(graph.most_specific_common_ancestors(node, link), vec![atom]);
}

#[test]
fn refuses_cycles() {
    let (mut graph, [atom, node, _, pattern]) = diamond();

    assert_eq!(
        graph.add_parent(atom, pattern),
        Err(GraphError::CycleDetected {
            child: atom,
            parent: pattern
        })
    );
    assert!(graph.add_parent(node, node).is_err());
    assert!(!graph.is_subtype(atom, pattern));
}

#[test]
fn duplicate_edge_is_noop() {
    let (mut graph, [atom, node, ..]) = diamond();

    graph.add_parent(node, atom).unwrap();

    assert_eq!(graph.parents(node), &[atom]);
}

#[test]
fn mutation_invalidates_cached_closures() {
    let mut graph = InheritanceGraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    graph.add_parent(b, a).unwrap();

    // Fill caches, then extend the chain above the root.
    assert_eq!(graph.ancestors(b), &[a]);
    assert_eq!(graph.descendants(c), &[] as &[TypeId]);
    graph.add_parent(a, c).unwrap();

    assert_eq!(graph.ancestors(b), &[a, c]);
    assert_eq!(graph.descendants(c), &[a, b]);
    assert!(graph.is_subtype(b, c));
}

#[test]
fn unknown_ids_match_nothing() {
    let (graph, [atom, ..]) = diamond();
    let ghost = TypeId::from_raw(99);

    assert!(!graph.is_subtype(ghost, ghost));
    assert!(!graph.is_subtype(ghost, atom));
    assert!(graph.ancestors(ghost).is_empty());
    assert!(graph.common_ancestors(ghost, atom).is_empty());
}

#[test]
fn truncate_drops_nodes_and_edges() {
    let (mut graph, [atom, node, link, _]) = diamond();
    assert_eq!(graph.descendants(atom).len(), 3);

    graph.truncate(3);

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.children(link), &[] as &[TypeId]);
    assert_eq!(graph.descendants(atom), &[node, link]);
}

#[test]
fn unknown_ids_are_refused() {
    let (mut graph, [atom, ..]) = diamond();
    let ghost = TypeId::from_raw(99);

    assert_eq!(graph.add_parent(ghost, atom), Err(GraphError::UnknownType(ghost)));
    assert_eq!(graph.add_parent(atom, ghost), Err(GraphError::UnknownType(ghost)));
    assert_eq!(graph.len(), 4);
}

#[test]
fn deep_chain_closures() {
    const DEPTH: usize = 3000;
    let mut graph = InheritanceGraph::new();
    let ids: Vec<TypeId> = (0..DEPTH).map(|_| graph.add_node()).collect();
    for pair in ids.windows(2) {
        graph.add_parent(pair[1], pair[0]).unwrap();
    }
    let (root, leaf) = (ids[0], ids[DEPTH - 1]);

    assert_eq!(graph.descendants(root).len(), DEPTH - 1);
    assert_eq!(graph.descendants(root), &ids[1..]);
    assert_eq!(graph.ancestors(leaf), &ids[..DEPTH - 1]);
    assert!(graph.is_subtype(leaf, root));
    assert_eq!(graph.common_ancestors(leaf, ids[1]), vec![root, ids[1]]);
}
