use atomtypes_core::ModuleDeclarations;

use crate::error::ScheduleError;
use crate::schedule::schedule;

fn module(name: &str, depends: &[&str]) -> ModuleDeclarations {
    depends
        .iter()
        .fold(ModuleDeclarations::new(name), |m, d| m.depends_on(*d))
}

fn names(order: &[&ModuleDeclarations]) -> Vec<String> {
    order.iter().map(|m| m.module.clone()).collect()
}

fn nothing_registered(_: &str) -> bool {
    false
}

#[test]
fn dependencies_come_first() {
    let modules = [
        module("miner", &["core", "spacetime"]),
        module("spacetime", &["core"]),
        module("core", &[]),
    ];

    let order = schedule(&modules, nothing_registered).unwrap();

    assert_eq!(names(&order), vec!["core", "spacetime", "miner"]);
}

#[test]
fn independent_modules_keep_input_order() {
    let modules = [
        module("b", &[]),
        module("a", &[]),
        module("c", &["a"]),
        module("d", &[]),
    ];

    let order = schedule(&modules, nothing_registered).unwrap();

    assert_eq!(names(&order), vec!["b", "a", "c", "d"]);
}

#[test]
fn registered_dependencies_are_satisfied() {
    let modules = [module("miner", &["core"])];

    let order = schedule(&modules, |name| name == "core").unwrap();

    assert_eq!(names(&order), vec!["miner"]);
}

#[test]
fn unknown_dependency() {
    let modules = [module("miner", &["core"])];

    let err = schedule(&modules, nothing_registered).unwrap_err();

    assert_eq!(
        err,
        ScheduleError::UnknownDependency {
            module: "miner".into(),
            dependency: "core".into()
        }
    );
}

#[test]
fn duplicate_module() {
    let modules = [module("core", &[]), module("core", &[])];

    let err = schedule(&modules, nothing_registered).unwrap_err();

    assert_eq!(err, ScheduleError::DuplicateModule("core".into()));
}

#[test]
fn dependency_cycle() {
    let modules = [
        module("core", &[]),
        module("b", &["a"]),
        module("a", &["b", "core"]),
    ];

    let err = schedule(&modules, nothing_registered).unwrap_err();

    insta::assert_snapshot!(err, @"module dependency cycle between `b`, `a`");
}

#[test]
fn self_dependency_is_a_cycle() {
    let modules = [module("loop", &["loop"])];

    let err = schedule(&modules, nothing_registered).unwrap_err();

    assert_eq!(
        err,
        ScheduleError::DependencyCycle {
            modules: vec!["loop".into()]
        }
    );
}

#[test]
fn empty_set() {
    assert!(schedule(&[], nothing_registered).unwrap().is_empty());
}
