mod support;

use docmap::{doc, Document, Mapper, Value};
use pretty_assertions::assert_eq;
use std_util::assert_err;
use support::*;

#[test]
fn fields_are_written_from_the_map() {
    let mapper = builder().build_strict().unwrap();

    let document = mapper.to_document(&ada()).unwrap();

    assert_eq!(
        document,
        doc! {
            "_id" => "u1",
            "first_name" => "Ada",
            "mail" => "ada@example.com",
            "age" => 36,
            "address" => doc! {
                "street" => "12 St James's Square",
                "city" => "London",
            },
            "addresses" => vec![
                doc! { "street" => "1 Main Street", "city" => "Paris" },
                doc! { "street" => "2 Side Street", "city" => "Rome" },
            ],
            "tags" => vec!["math", "engines"],
            "nickname" => "Countess",
        }
    );
}

#[test]
fn identifier_is_the_first_key() {
    let mapper = builder().build_strict().unwrap();

    let document = mapper.to_document(&ada()).unwrap();
    assert_eq!(document.keys().next(), Some("_id"));
    assert!(!document.contains_key("id"));
}

#[test]
fn null_values_are_recorded() {
    let mapper = builder().build_strict().unwrap();

    let user = User {
        id: Some("u1".to_string()),
        first_name: Some("Ada".to_string()),
        ..User::default()
    };

    let document = mapper.to_document(&user).unwrap();
    assert_eq!(document.get("age"), Some(&Value::Null));
    assert_eq!(document.get("address"), Some(&Value::Null));
    assert_eq!(document.get("addresses"), Some(&Value::Array(vec![])));
}

#[test]
fn identifier_only_type_collapses_to_empty_document() {
    let mapper = builder().build_strict().unwrap();

    let document = mapper.to_document(&Counter { id: Some(1) }).unwrap();
    assert_eq!(document, Document::new());
}

#[test]
fn all_null_embedded_document_collapses() {
    let mapper = builder().build_strict().unwrap();

    let user = User {
        id: Some("u1".to_string()),
        address: Some(Address::default()),
        ..User::default()
    };

    let document = mapper.to_document(&user).unwrap();
    assert_eq!(document.get("_id"), Some(&Value::from("u1")));
    assert_eq!(document.get("address"), Some(&Value::Document(Document::new())));
}

#[test]
fn unmarked_fields_are_not_mapped() {
    let mapper = builder().build_strict().unwrap();

    let document = mapper.to_document(&ada()).unwrap();
    assert!(!document.contains_key("secret"));
}

#[test]
fn type_without_identifier_is_rejected() {
    let mapper = builder().build_strict().unwrap();

    let anonymous = Anonymous {
        name: Some("nobody".to_string()),
    };

    assert_err!(mapper.to_document(&anonymous), is_missing_identifier);
}

#[test]
fn values_without_document_form_are_rejected() {
    let mapper = builder().build_strict().unwrap();

    let handle = Handle {
        id: Some("h1".to_string()),
    };

    assert_err!(mapper.to_document(&handle), is_unsupported_value);
}

#[test]
fn attribute_that_cannot_be_written_is_invalid_metadata() {
    let mapper = builder().build_strict().unwrap();

    // `author` has an accessor but no mutator and is not a public field
    let post = Post {
        id: Some("p1".to_string()),
        ..Post::default()
    };

    let err = assert_err!(mapper.to_document(&post), is_invalid_metadata);
    assert!(err.to_string().contains("`app::Post.author` cannot be written"));
}

#[test]
fn embedding_cycle_is_invalid_metadata() {
    let mapper = builder().build_strict().unwrap();

    let node = Node {
        id: Some("n1".to_string()),
        child: None,
    };

    let err = assert_err!(mapper.to_document(&node), is_invalid_metadata);
    assert!(err
        .to_string()
        .contains("embedding cycle: app::Node -> app::Node"));
}

#[test]
fn field_under_the_identifier_key_is_invalid_metadata() {
    let mapper = builder().build_strict().unwrap();

    let item = Item {
        id: Some("real-id".to_string()),
        code: Some("C-7".to_string()),
    };

    let err = assert_err!(mapper.to_document(&item), is_invalid_metadata);
    assert!(err
        .to_string()
        .contains("`app::Item` maps `code` to key `_id`"));
}

#[test]
fn unregistered_type_is_unsupported() {
    init_logging();
    let mapper = docmap::Builder::new().build_strict().unwrap();

    assert_err!(mapper.to_document(&ada()), is_unsupported_type);
}
