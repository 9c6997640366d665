use indoc::indoc;

use crate::{DeclarationError, ModuleDeclarations, TypeDeclaration};

#[test]
fn parses_full_feed() {
    let json = indoc! {r#"
        {
          "module": "pattern_miner",
          "depends": ["core"],
          "types": [
            { "name": "PatternLink", "parents": ["OrderedLink"] },
            { "name": "Marker" }
          ]
        }
    "#};

    let batch = ModuleDeclarations::from_json(json).unwrap();

    assert_eq!(batch.module, "pattern_miner");
    assert_eq!(batch.depends, vec!["core"]);
    assert_eq!(
        batch.types,
        vec![
            TypeDeclaration::new("PatternLink", ["OrderedLink"]),
            TypeDeclaration::root("Marker"),
        ]
    );
}

#[test]
fn optional_fields_default() {
    let batch = ModuleDeclarations::from_json(r#"{ "module": "empty" }"#).unwrap();

    assert_eq!(batch, ModuleDeclarations::new("empty"));
}

#[test]
fn missing_module_is_an_error() {
    let err = ModuleDeclarations::from_json(r#"{ "types": [] }"#).unwrap_err();

    assert!(matches!(err, DeclarationError::Json(_)));
    assert_eq!(err.line(), None);
}

#[test]
fn to_json_omits_empty_lists() {
    let batch = ModuleDeclarations::new("core")
        .declare_root("Atom")
        .declare("Node", ["Atom"]);

    insta::assert_snapshot!(batch.to_json(), @r#"
    {
      "module": "core",
      "types": [
        {
          "name": "Atom"
        },
        {
          "name": "Node",
          "parents": [
            "Atom"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn to_json_parses_back() {
    let batch = ModuleDeclarations::new("m")
        .depends_on("core")
        .declare("A", ["Atom", "Node"]);

    assert_eq!(ModuleDeclarations::from_json(&batch.to_json()).unwrap(), batch);
}
