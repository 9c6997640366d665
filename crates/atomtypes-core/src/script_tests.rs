use indoc::indoc;

use crate::{DeclarationError, ModuleDeclarations, TypeDeclaration, parse_script};

#[test]
fn parses_declarations_in_order() {
    let src = indoc! {r#"
        // core atom types
        ATOM
        NODE <- ATOM
        LINK <- ATOM   // links hold outgoing sets
        CONCEPT_NODE <- NODE
    "#};

    let batch = parse_script("core", src).unwrap();

    assert_eq!(batch.module, "core");
    assert!(batch.depends.is_empty());
    assert_eq!(
        batch.types,
        vec![
            TypeDeclaration::root("Atom"),
            TypeDeclaration::new("Node", ["Atom"]),
            TypeDeclaration::new("Link", ["Atom"]),
            TypeDeclaration::new("ConceptNode", ["Node"]),
        ]
    );
}

#[test]
fn directives_set_module_and_dependencies() {
    let src = indoc! {r#"
        @module pattern_miner
        @depends core, spacetime
        PATTERN_LINK <- ORDERED_LINK
    "#};

    let batch = parse_script("ignored", src).unwrap();

    assert_eq!(batch.module, "pattern_miner");
    assert_eq!(batch.depends, vec!["core", "spacetime"]);
    assert_eq!(
        batch.get("PatternLink"),
        Some(&TypeDeclaration::new("PatternLink", ["OrderedLink"]))
    );
}

#[test]
fn explicit_name_is_used_for_later_parents() {
    let src = indoc! {r#"
        DNODE "DNode"
        CHILD <- DNODE, ATOM
    "#};

    let batch = parse_script("m", src).unwrap();

    assert_eq!(batch.types[0].name, "DNode");
    assert_eq!(batch.types[1].parents, vec!["DNode", "Atom"]);
}

#[test]
fn multiple_parents() {
    let batch = parse_script("m", "PATTERN_VARIABLE_NODE <- VARIABLE_NODE,CONCEPT_NODE").unwrap();

    assert_eq!(
        batch.types[0].parents,
        vec!["VariableNode", "ConceptNode"]
    );
}

#[test]
fn empty_script_is_empty_batch() {
    let batch = parse_script("m", "\n  // nothing\n\n").unwrap();

    assert!(batch.is_empty());
    assert_eq!(batch.module, "m");
}

#[test]
fn missing_symbol() {
    let err = parse_script("m", "ATOM\n<- ATOM").unwrap_err();

    assert!(matches!(err, DeclarationError::MissingSymbol { line: 2 }));
    insta::assert_snapshot!(err, @"line 2: expected a type symbol");
}

#[test]
fn empty_parent_in_list() {
    let err = parse_script("m", "NODE <- ATOM,").unwrap_err();

    assert!(matches!(err, DeclarationError::EmptyName { line: 1 }));
}

#[test]
fn unterminated_name() {
    let err = parse_script("m", "NODE <- ATOM \"Node").unwrap_err();

    assert_eq!(err.line(), Some(1));
    insta::assert_snapshot!(err, @"line 1: unterminated quoted name");
}

#[test]
fn unknown_directive() {
    let err = parse_script("m", "ATOM\n\n@include other.types").unwrap_err();

    insta::assert_snapshot!(err, @"line 3: unknown directive `include`");
}

#[test]
fn trailing_input_after_name() {
    let err = parse_script("m", "NODE \"Node\" extra").unwrap_err();

    insta::assert_snapshot!(err, @"line 1: unexpected `extra`");
}

#[test]
fn symbol_with_spaces() {
    let err = parse_script("m", "CONCEPT NODE <- ATOM").unwrap_err();

    insta::assert_snapshot!(err, @"line 1: unexpected `NODE`");
}

#[test]
fn to_script_renders_batch() {
    let batch = ModuleDeclarations::new("pattern_miner")
        .depends_on("core")
        .declare("PatternLink", ["OrderedLink"])
        .declare("PatternVariableNode", ["VariableNode", "ConceptNode"]);

    insta::assert_snapshot!(batch.to_script(), @r"
    @module pattern_miner
    @depends core
    PATTERN_LINK <- ORDERED_LINK
    PATTERN_VARIABLE_NODE <- VARIABLE_NODE, CONCEPT_NODE
    ");
}

#[test]
fn to_script_quotes_names_that_do_not_round_trip() {
    let batch = ModuleDeclarations::new("m")
        .declare_root("atom")
        .declare("Node", ["atom"]);

    insta::assert_snapshot!(batch.to_script(), @r#"
    @module m
    ATOM "atom"
    NODE <- ATOM
    "#);
}

#[test]
fn to_script_parses_back() {
    let batch = ModuleDeclarations::new("m")
        .depends_on("core")
        .declare_root("atom")
        .declare("ConceptNode", ["atom", "Node"]);

    let reparsed = parse_script("other", &batch.to_script()).unwrap();

    assert_eq!(reparsed, batch);
}

#[test]
fn quoted_parents_are_literal() {
    let src = indoc! {r#"
        CHILD <- "Foo_Bar", NODE
        OTHER <- "Foo_Bar" "other"
    "#};

    let batch = parse_script("m", src).unwrap();

    assert_eq!(
        batch.types,
        vec![
            TypeDeclaration::new("Child", ["Foo_Bar", "Node"]),
            TypeDeclaration::new("other", ["Foo_Bar"]),
        ]
    );
}

#[test]
fn comment_needs_leading_space() {
    let err = parse_script("m", "ATOM // root\nNODE <- ATOM// parent").unwrap_err();

    insta::assert_snapshot!(err, @"line 2: unexpected `//`");
}

#[test]
fn punctuation_in_symbol_is_an_error() {
    let err = parse_script("m", "C//D <- A,B").unwrap_err();
    insta::assert_snapshot!(err, @"line 1: unexpected `//D`");

    let err = parse_script("m", "A,B \"a,b\"").unwrap_err();
    insta::assert_snapshot!(err, @"line 1: unexpected `,`");
}

#[test]
fn arrow_in_parent_list() {
    let err = parse_script("m", "NODE <- <- ATOM").unwrap_err();

    insta::assert_snapshot!(err, @"line 1: unexpected `<-`");
}

#[test]
fn to_script_quotes_parents_that_do_not_round_trip() {
    let batch = ModuleDeclarations::new("b")
        .depends_on("a")
        .declare("Child", ["Foo_Bar", "Node"])
        .declare_root("foo")
        .declare("Leaf", ["foo"]);

    let script = batch.to_script();

    insta::assert_snapshot!(script, @r#"
    @module b
    @depends a
    CHILD <- "Foo_Bar", NODE
    FOO "foo"
    LEAF <- FOO
    "#);
    assert_eq!(parse_script("other", &script).unwrap(), batch);
}
