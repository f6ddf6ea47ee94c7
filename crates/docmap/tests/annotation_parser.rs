mod support;

use docmap::model::Descriptor;
use docmap::parse::{Declaration, FieldMetadata, Parser};
use docmap::{AnnotationParser, Model, Registry};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std_util::assert_err;
use support::*;

fn parser() -> AnnotationParser {
    let mut registry = Registry::new();
    registry
        .register::<User>()
        .register::<Address>()
        .register::<Broken>();
    AnnotationParser::new(Arc::new(registry))
}

#[derive(Debug, Clone, Default)]
struct Broken;

impl Model for Broken {
    fn class_name() -> &'static str {
        "app::Broken"
    }

    fn descriptor() -> Descriptor {
        Descriptor::builder::<Self>()
            .field("kind", r#"@Document(embed = "graph", target = "app::Address")"#)
            .build()
    }
}

/// A registry holding `app::Broken` with a single field documented as `doc`.
fn broken(doc: &str) -> AnnotationParser {
    let mut registry = Registry::new();
    registry.insert(Descriptor::builder::<Broken>().field("field", doc).build());
    AnnotationParser::new(Arc::new(registry))
}

#[test]
fn supports_registered_classes() {
    let parser = parser();

    assert!(parser.supports("app::User"));
    assert!(!parser.supports("app::Unknown"));
}

#[test]
fn parses_marked_fields_in_declaration_order() {
    let declaration = parser().parse("app::User").unwrap();

    assert_eq!(
        declaration,
        Declaration::new("app::User")
            .field(FieldMetadata::attribute("id"))
            .field(FieldMetadata::attribute("firstName"))
            .field(FieldMetadata::attribute("email").with_key("mail"))
            .field(FieldMetadata::attribute("age"))
            .field(FieldMetadata::attribute("address").embed_document("app::Address"))
            .field(FieldMetadata::attribute("addresses").embed_collection("app::Address"))
            .field(FieldMetadata::attribute("tags"))
            .field(FieldMetadata::attribute("nickname"))
    );
}

#[test]
fn custom_marker() {
    let mut registry = Registry::new();
    registry.register::<User>();

    let parser = AnnotationParser::new(Arc::new(registry)).with_marker("@Mongo");
    assert!(parser.parse("app::User").unwrap().fields.is_empty());
}

#[test]
fn malformed_annotations_are_invalid_metadata() {
    for (doc, message) in [
        (
            r#"@Document(embed = "graph", target = "app::Address")"#,
            "`app::Broken.field`: unknown embed kind `graph`",
        ),
        (
            r#"@Document(target = "app::Address")"#,
            "`embed` and `target` must be given together",
        ),
        (
            r#"@Document(embed = "document")"#,
            "`embed` and `target` must be given together",
        ),
        (r#"@Document(colour = "red")"#, "unknown argument `colour`"),
        (r#"@Document(key = "open""#, "unterminated `@Document` arguments"),
        (r#"@Document(key = "open)"#, "unterminated `@Document` arguments"),
        ("@Document(key = open)", "malformed argument `key = open`"),
    ] {
        let err = assert_err!(broken(doc).parse("app::Broken"), is_invalid_metadata);
        assert!(err.to_string().contains(message), "doc={doc} error={err}");
    }
}

#[test]
fn quoted_values_may_hold_separators() {
    for (doc, key) in [
        (r#"@Document(key = "a,b")"#, "a,b"),
        (r#"@Document(key = "a)b")"#, "a)b"),
        (r#"@Document(key = "a=b")"#, "a=b"),
    ] {
        let declaration = broken(doc).parse("app::Broken").unwrap();
        assert_eq!(
            declaration.fields,
            vec![FieldMetadata::attribute("field").with_key(key)],
            "doc={doc}"
        );
    }

    let declaration = broken(r#"@Document(key = "x,y", embed = "document", target = "app::Address")"#)
        .parse("app::Broken")
        .unwrap();
    assert_eq!(
        declaration.fields,
        vec![FieldMetadata::attribute("field")
            .with_key("x,y")
            .embed_document("app::Address")]
    );
}

#[test]
fn marker_without_arguments_maps_by_attribute() {
    let declaration = broken("The name.\n\n@Document").parse("app::Broken").unwrap();
    assert_eq!(declaration.fields, vec![FieldMetadata::attribute("field")]);

    let declaration = broken("@Document()").parse("app::Broken").unwrap();
    assert_eq!(declaration.fields, vec![FieldMetadata::attribute("field")]);
}

#[test]
fn registered_but_broken_descriptor_fails_on_parse_only() {
    let parser = parser();

    assert!(parser.supports("app::Broken"));
    assert_err!(parser.parse("app::Broken"), is_invalid_metadata);
}

#[test]
fn unregistered_class_is_unsupported() {
    assert_err!(parser().parse("app::Unknown"), is_unsupported_type);
}
