use std::sync::Arc;

use atomtypes_core::{ModuleDeclarations, TypeId};

use crate::query::{Tagged, TypeQueryFacade, Typed};
use crate::registrar::ModuleRegistrar;

fn facade() -> TypeQueryFacade {
    let mut registrar = ModuleRegistrar::new();
    registrar
        .register_module(&ModuleDeclarations::new("m1").declare_root("Atom"))
        .unwrap();
    registrar
        .register_module(
            &ModuleDeclarations::new("m2")
                .depends_on("m1")
                .declare("Node", ["Atom"])
                .declare("Link", ["Atom"])
                .declare("PatternLink", ["Link", "Node"]),
        )
        .unwrap();
    TypeQueryFacade::new(Arc::new(registrar.freeze()))
}

fn names(q: &TypeQueryFacade, ids: &[TypeId]) -> Vec<String> {
    q.names(ids).map(str::to_owned).collect()
}

/// An atom as the hypergraph engine would hold it.
struct Atom {
    ty: TypeId,
}

impl Typed for Atom {
    fn atom_type(&self) -> TypeId {
        self.ty
    }
}

#[test]
fn pattern_link_scenario() {
    let q = facade();

    assert!(q.is_a("PatternLink", "Atom"));
    assert!(!q.is_a("Node", "Link"));
    assert_eq!(names(&q, &q.common_ancestors("Node", "Link")), vec!["Atom"]);
}

#[test]
fn is_a_is_reflexive_and_transitive() {
    let q = facade();
    let all: Vec<TypeId> = q.hierarchy().iter().map(|r| r.id).collect();

    for &a in &all {
        assert!(q.is_a(a, a));
        for &b in &all {
            for &c in &all {
                if q.is_a(a, b) && q.is_a(b, c) {
                    assert!(q.is_a(a, c));
                }
            }
        }
    }
}

#[test]
fn keys_mix_ids_and_names() {
    let q = facade();
    let atom = q.resolve("Atom").unwrap();
    let owned = String::from("Node");

    assert!(q.is_a(&owned, atom));
    assert!(q.is_a(q.resolve("PatternLink").unwrap(), "Link"));
}

#[test]
fn unknown_is_no_match() {
    let q = facade();

    assert_eq!(q.resolve("Ghost"), None);
    assert!(!q.is_a("Ghost", "Atom"));
    assert!(!q.is_a("Atom", "Ghost"));
    assert!(!q.is_a(TypeId::from_raw(42), TypeId::from_raw(42)));
    assert!(q.ancestors("Ghost").is_empty());
    assert!(q.common_ancestors("Ghost", "Atom").is_empty());
    assert!(q.record("Ghost").is_none());
    assert!(q.tag("Ghost", ()).is_none());
}

#[test]
fn type_of_dispatches_on_tag() {
    let q = facade();
    let link = q.resolve("PatternLink").unwrap();
    let atom = Atom { ty: link };

    assert_eq!(q.type_of(&atom), link);
    assert!(q.conforms(&atom, "Node"));
    assert!(!q.conforms(&Atom { ty: q.resolve("Node").unwrap() }, "Link"));
}

#[test]
fn tagged_values() {
    let q = facade();

    let tagged: Tagged<&str> = q.tag("Node", "cat").unwrap();

    assert_eq!(tagged.ty(), q.resolve("Node").unwrap());
    assert_eq!(*tagged.value(), "cat");
    assert!(q.conforms(&tagged, "Atom"));
    assert_eq!(tagged.into_inner(), "cat");
}

#[test]
fn closures_by_name() {
    let q = facade();

    assert_eq!(names(&q, q.ancestors("PatternLink")), vec!["Atom", "Node", "Link"]);
    assert_eq!(names(&q, q.descendants("Atom")), vec!["Node", "Link", "PatternLink"]);
    assert_eq!(
        names(&q, &q.most_specific_common_ancestors("PatternLink", "Link")),
        vec!["Link"]
    );
    assert_eq!(q.record("PatternLink").unwrap().depth, 2);
}

#[test]
fn facade_is_shared_across_threads() {
    let q = facade();
    let pattern = q.resolve("PatternLink").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let q = q.clone();
            std::thread::spawn(move || q.is_a(pattern, "Atom") && !q.is_a("Node", "Link"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
