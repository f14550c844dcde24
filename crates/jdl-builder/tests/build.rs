use serde_json::{Value, json};

use jdl_builder::{Span, Spanned, build, cst, error::ErrorCode, lint::check_datasets};
use jdl_core::option::OptionFamily;

// ============================================================================
// Helpers
// ============================================================================

/// Tokens located in a source text, so that diagnostics point at real offsets.
struct Source(&'static str);

impl Source {
    /// The first occurrence of `image` in the source.
    fn tok(&self, image: &'static str) -> cst::Token<'static> {
        let start = self
            .0
            .find(image)
            .unwrap_or_else(|| panic!("`{image}` not in source"));
        let end = start + image.len();
        Spanned::new(&self.0[start..end], Span::new(start..end))
    }
}

fn tok(image: &'static str) -> cst::Token<'static> {
    Spanned::new(image, Span::new(0..image.len()))
}

fn side(name: &'static str) -> cst::RelationshipSide<'static> {
    cst::RelationshipSide {
        comment: None,
        name: tok(name),
        readonly: None,
        annotations: vec![],
        injected_field: None,
        injected_field_params: vec![],
        required: None,
    }
}

fn binary_option(
    option: &'static str,
    names: &[&'static str],
    value: &'static str,
) -> cst::BinaryOptionDeclaration<'static> {
    cst::BinaryOptionDeclaration {
        option: tok(option),
        entity_list: cst::EntityList {
            names: names.iter().map(|name| tok(name)).collect(),
            star: None,
            method: Some(tok(value)),
            method_path: None,
        },
        exclusion: None,
    }
}

fn to_json(prog: &cst::Prog<'_>) -> Value {
    let document = build(prog).expect("program builds");
    serde_json::to_value(&document).expect("document serializes")
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_empty_program_has_empty_collections() {
    let json = to_json(&cst::Prog::default());

    for key in [
        "applications",
        "deployments",
        "entities",
        "datasets",
        "pages",
        "jsonConfigs",
        "relationships",
        "enums",
    ] {
        assert_eq!(json[key], json!([]), "{key} should be an empty list");
    }
    assert_eq!(json["constants"], json!({}));

    let options = json["options"].as_object().expect("options is a map");
    assert_eq!(options.len(), OptionFamily::ALL.len());
    assert_eq!(json["options"]["skipClient"], json!({ "list": [], "excluded": [] }));
    assert_eq!(json["options"]["dto"], json!({}));
}

#[test]
fn test_entity_with_required_field() {
    let prog = cst::Prog {
        entities: vec![cst::EntityDeclaration {
            annotations: vec![],
            javadoc: None,
            name: tok("Foo"),
            table_name: None,
            body: vec![cst::FieldDeclaration {
                annotations: vec![],
                javadoc: None,
                name: tok("name"),
                field_type: tok("String"),
                validations: vec![cst::Validation::Required(tok("required"))],
            }],
        }],
        ..Default::default()
    };
    let json = to_json(&prog);
    let entity = &json["entities"][0];

    assert_eq!(entity["name"], "Foo");
    assert_eq!(entity["tableName"], "Foo");
    assert_eq!(entity["fields"][0]["name"], "name");
    assert_eq!(entity["fields"][0]["type"], "String");
    assert_eq!(
        entity["fields"][0]["validations"],
        json!([{ "key": "required", "value": "" }])
    );
}

#[test]
fn test_binary_options_merge_per_value() {
    let prog = cst::Prog {
        binary_options: vec![
            binary_option("dto", &["A"], "mapstruct"),
            binary_option("dto", &["B"], "mapstruct"),
            binary_option("paginate", &["A"], "pagination"),
        ],
        ..Default::default()
    };
    let json = to_json(&prog);

    assert_eq!(json["options"]["dto"]["mapstruct"]["list"], json!(["A", "B"]));
    assert_eq!(json["options"]["pagination"]["pagination"]["list"], json!(["A"]));
}

#[test]
fn test_relationship_injected_field() {
    let mut from = side("A");
    from.injected_field = Some(tok("b"));
    let mut to = side("B");
    to.injected_field = Some(tok("a"));
    to.injected_field_params = vec![
        cst::InjectedFieldParam {
            names: vec![tok("id")],
            annotations: vec![],
        },
        cst::InjectedFieldParam {
            names: vec![tok("name")],
            annotations: vec![],
        },
    ];
    let prog = cst::Prog {
        relationships: vec![cst::RelationDeclaration {
            relationship_type: tok("OneToMany"),
            bodies: vec![cst::RelationshipBody {
                annotations: vec![],
                from,
                to,
                options: vec![],
            }],
        }],
        ..Default::default()
    };
    let json = to_json(&prog);
    let pair = &json["relationships"][0];

    assert_eq!(pair["cardinality"], "OneToMany");
    assert_eq!(pair["from"]["name"], "A");
    assert_eq!(pair["from"]["injectedField"], "b");
    assert_eq!(pair["to"]["name"], "B");
    assert_eq!(pair["to"]["injectedField"], "a(id,name)");
    assert_eq!(pair["to"]["required"], false);
}

#[test]
fn test_required_key_absent_without_injected_field() {
    let prog = cst::Prog {
        relationships: vec![cst::RelationDeclaration {
            relationship_type: tok("ManyToOne"),
            bodies: vec![cst::RelationshipBody {
                annotations: vec![],
                from: side("A"),
                to: side("B"),
                options: vec![],
            }],
        }],
        ..Default::default()
    };
    let json = to_json(&prog);
    let pair = &json["relationships"][0];

    assert!(pair["from"].get("required").is_none());
    assert!(pair["to"].get("required").is_none());
}

#[test]
fn test_page_nesting_order() {
    let field = |name: &'static str| cst::PageFieldDeclaration {
        annotations: vec![],
        names: vec![tok(name)],
    };
    let prog = cst::Prog {
        pages: vec![cst::PageDeclaration {
            annotations: vec![],
            name: tok("FooPage"),
            entity: tok("Foo"),
            tabs: vec![cst::PageTabsDeclaration {
                tabs: vec![cst::PageTabDeclaration {
                    annotations: vec![],
                    name: tok("main"),
                    others: vec![cst::PageOthersDeclaration {
                        elements: vec![cst::PageOtherDeclaration::Group(
                            cst::PageGroupDeclaration {
                                annotations: vec![],
                                name: tok("details"),
                                groups: vec![],
                                fields: vec![cst::PageFieldsDeclaration {
                                    fields: vec![field("first"), field("second"), field("third")],
                                }],
                            },
                        )],
                    }],
                }],
            }],
            others: vec![],
        }],
        ..Default::default()
    };
    let json = to_json(&prog);
    let page = &json["pages"][0];

    assert_eq!(page["type"], "page");
    assert_eq!(page["entity"], "Foo");
    let tab = &page["values"][0];
    assert_eq!(tab["type"], "tab");
    let group = &tab["values"][0];
    assert_eq!(group["type"], "group");
    let names: Vec<_> = group["values"]
        .as_array()
        .expect("group values")
        .iter()
        .map(|value| value["name"].as_str().expect("field name"))
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_unknown_relationship_option_is_located() {
    let source = Source("relationship OneToOne { A to B with jpaDerivedIdentifer }");
    let prog = cst::Prog {
        relationships: vec![cst::RelationDeclaration {
            relationship_type: source.tok("OneToOne"),
            bodies: vec![cst::RelationshipBody {
                annotations: vec![],
                from: cst::RelationshipSide {
                    name: source.tok("A"),
                    ..side("A")
                },
                to: cst::RelationshipSide {
                    name: source.tok("B"),
                    ..side("B")
                },
                options: vec![source.tok("jpaDerivedIdentifer")],
            }],
        }],
        ..Default::default()
    };
    let err = build(&prog).unwrap_err();

    let [diagnostic] = err.diagnostics() else {
        panic!("expected a single diagnostic");
    };
    assert_eq!(diagnostic.code(), Some(ErrorCode::E100));
    assert_eq!(diagnostic.labels()[0].span(), Span::new(36..55));
    assert_eq!(diagnostic.labels()[1].span(), Span::new(24..30));
}

#[test]
fn test_check_datasets_empty_or_absent() {
    let datasets: Vec<cst::DatasetDeclaration<'_>> = Vec::new();
    assert!(check_datasets(Some(datasets.as_slice())).is_empty());
    assert!(check_datasets(None).is_empty());
}
