//! End-to-end tests driving the public API: model in, Go source out.

use resetgen::{
    BasicKind, CompositeSchema, DomainId, FieldDescriptor, GenerateError, Generator, NamedTypeDef,
    QualifiedName, StructuralModel, TypeSchema, RESET_OPERATION,
};

const DOMAIN: &str = "github.com/acme/models";

fn domain() -> DomainId {
    DomainId::new(DOMAIN)
}

fn name(ident: &str) -> QualifiedName {
    QualifiedName::new(DOMAIN, ident)
}

fn composite(fields: Vec<FieldDescriptor>) -> TypeSchema {
    TypeSchema::Composite(CompositeSchema::new(fields))
}

#[test]
fn test_scalar_fields_reset_to_canonical_zeros() {
    let model = StructuralModel::new().with(NamedTypeDef::new(
        name("Point"),
        composite(vec![
            FieldDescriptor::new("X", TypeSchema::Basic(BasicKind::Int)),
            FieldDescriptor::new("Y", TypeSchema::Basic(BasicKind::String)),
        ]),
    ));

    let output = Generator::new(&model, domain())
        .generate(&[name("Point")])
        .unwrap();
    assert_eq!(
        output,
        "// Code generated by resetgen. DO NOT EDIT.\n\
         package models\n\
         \n\
         func (p *Point) Reset() {\n\
         \tp.X = 0\n\
         \tp.Y = \"\"\n\
         }\n"
    );
}

#[test]
fn test_nonil_slice_resets_to_fresh_empty_slice() {
    let model = StructuralModel::new().with(NamedTypeDef::new(
        name("Bag"),
        composite(vec![FieldDescriptor::new(
            "Items",
            TypeSchema::slice(TypeSchema::Basic(BasicKind::Int)),
        )
        .with_directive_text("nonil")]),
    ));

    let output = Generator::new(&model, domain())
        .generate(&[name("Bag")])
        .unwrap();
    assert!(output.contains("b.Items = make([]int, 0)"));
}

#[test]
fn test_embedded_type_with_reset_capability_delegates() {
    let inner = NamedTypeDef::new(
        name("Inner"),
        composite(vec![FieldDescriptor::new(
            "count",
            TypeSchema::Basic(BasicKind::Int),
        )]),
    )
    .with_reference_operation(RESET_OPERATION);
    let inner_schema = inner.schema();

    let model = StructuralModel::new().with(inner).with(NamedTypeDef::new(
        name("Outer"),
        composite(vec![
            FieldDescriptor::new("Inner", inner_schema).with_anonymous(true)
        ]),
    ));

    let output = Generator::new(&model, domain())
        .generate(&[name("Outer")])
        .unwrap();
    assert!(output.contains("o.Inner.Reset()"));
    assert!(!output.contains("o.Inner.count"));
}

#[test]
fn test_foreign_embedding_with_unexported_field_is_reassigned_whole() {
    let foreign = NamedTypeDef::new(
        QualifiedName::new("github.com/vendor/foreign", "inner"),
        composite(vec![FieldDescriptor::new(
            "count",
            TypeSchema::Basic(BasicKind::Int),
        )]),
    );
    let foreign_schema = foreign.schema();

    let model = StructuralModel::new().with(foreign).with(NamedTypeDef::new(
        name("Outer"),
        composite(vec![
            FieldDescriptor::new("inner", foreign_schema).with_anonymous(true)
        ]),
    ));

    let output = Generator::new(&model, domain())
        .generate(&[name("Outer")])
        .unwrap();
    assert!(output.contains("o.inner = foreign.inner{}"));
    assert!(!output.contains("o.inner.count"));
}

#[test]
fn test_model_loads_from_json() {
    let json = r#"{
        "github.com/acme/models.User": {
            "name": { "domain": "github.com/acme/models", "ident": "User" },
            "underlying": {
                "kind": "Composite",
                "value": {
                    "fields": [
                        {
                            "name": "Name",
                            "ty": { "kind": "Basic", "value": "String" },
                            "exported": true
                        },
                        {
                            "name": "Tags",
                            "ty": {
                                "kind": "Slice",
                                "value": { "kind": "Basic", "value": "String" }
                            },
                            "exported": true,
                            "directives": { "nonil": "" }
                        }
                    ]
                }
            }
        }
    }"#;

    let model = StructuralModel::from_json(json).unwrap();
    let output = Generator::new(&model, domain())
        .generate(&[name("User")])
        .unwrap();
    assert!(output.contains("u.Name = \"\""));
    assert!(output.contains("u.Tags = make([]string, 0)"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let model = StructuralModel::new()
        .with(NamedTypeDef::new(
            name("A"),
            composite(vec![FieldDescriptor::new(
                "N",
                TypeSchema::Basic(BasicKind::Int),
            )]),
        ))
        .with(NamedTypeDef::new(
            name("B"),
            composite(vec![FieldDescriptor::new(
                "S",
                TypeSchema::Basic(BasicKind::String),
            )]),
        ));
    let generator = Generator::new(&model, domain());
    let selection = [name("A"), name("B")];

    let first = generator.generate(&selection).unwrap();
    let second = generator.generate(&selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_failed_type_aborts_the_whole_run() {
    let good = NamedTypeDef::new(
        name("Good"),
        composite(vec![FieldDescriptor::new(
            "N",
            TypeSchema::Basic(BasicKind::Int),
        )]),
    );
    // Embedded pointer fields are not walkable.
    let inner = NamedTypeDef::new(name("Inner"), composite(vec![]));
    let bad = NamedTypeDef::new(
        name("Bad"),
        composite(vec![FieldDescriptor::new(
            "Inner",
            TypeSchema::named(name("InnerRef"), TypeSchema::pointer(inner.schema())),
        )
        .with_anonymous(true)]),
    );

    let model = StructuralModel::new().with(good).with(inner).with(bad);
    let err = Generator::new(&model, domain())
        .generate(&[name("Good"), name("Bad")])
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::UnsupportedAnonymousKind { ref kind, .. } if kind == "pointer"
    ));
}

#[test]
fn test_full_file_snapshot() {
    let inner = NamedTypeDef::new(
        name("Session"),
        composite(vec![FieldDescriptor::new(
            "token",
            TypeSchema::Basic(BasicKind::String),
        )]),
    )
    .with_reference_operation(RESET_OPERATION);
    let session_schema = inner.schema();

    let model = StructuralModel::new().with(inner).with(NamedTypeDef::new(
        name("User"),
        composite(vec![
            FieldDescriptor::new("Name", TypeSchema::Basic(BasicKind::String)),
            FieldDescriptor::new("Age", TypeSchema::Basic(BasicKind::Int)),
            FieldDescriptor::new("Active", TypeSchema::Basic(BasicKind::Bool)),
            FieldDescriptor::new(
                "Tags",
                TypeSchema::slice(TypeSchema::Basic(BasicKind::String)),
            )
            .with_directive_text("nonil"),
            FieldDescriptor::new(
                "Attrs",
                TypeSchema::map(
                    TypeSchema::Basic(BasicKind::String),
                    TypeSchema::Basic(BasicKind::String),
                ),
            ),
            FieldDescriptor::new("Session", session_schema).with_anonymous(true),
        ]),
    ));

    let output = Generator::new(&model, domain())
        .generate(&[name("User")])
        .unwrap();
    insta::assert_snapshot!(output, @r#"
// Code generated by resetgen. DO NOT EDIT.
package models

func (u *User) Reset() {
	u.Name = ""
	u.Age = 0
	u.Active = false
	u.Tags = make([]string, 0)
	u.Attrs = nil
	u.Session.Reset()
}
"#);
}
