mod support;

use docmap::{doc, Document, Mapper, Value};
use pretty_assertions::assert_eq;
use std_util::assert_err;
use support::*;

#[test]
fn round_trip() {
    let mapper = builder().build_strict().unwrap();

    let user = ada();
    let document = mapper.to_document(&user).unwrap();
    let hydrated: User = mapper.hydrate(&document).unwrap();

    // `secret` is not mapped and does not survive
    assert_eq!(hydrated, User { secret: None, ..user });
}

#[test]
fn keys_come_from_the_map() {
    let mapper = builder().build_strict().unwrap();

    let user: User = mapper
        .hydrate(&doc! { "_id" => "u1", "mail" => "ada@example.com", "email" => "ignored" })
        .unwrap();

    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn public_fields_are_written_directly() {
    let mapper = builder().build_strict().unwrap();

    let user: User = mapper
        .hydrate(&doc! { "_id" => "u1", "nickname" => "Countess" })
        .unwrap();

    assert_eq!(user.nickname.as_deref(), Some("Countess"));
}

#[test]
fn hydrate_existing_instance() {
    let mapper = builder().build_strict().unwrap();

    let mut user = User {
        first_name: Some("Augusta".to_string()),
        ..User::default()
    };

    mapper
        .hydrate_into(&mut user, &doc! { "_id" => "u1", "age" => 36 })
        .unwrap();

    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.age, Some(36));
    assert_eq!(user.first_name.as_deref(), Some("Augusta"));
}

#[test]
fn unknown_keys_are_ignored() {
    let mapper = builder().build_strict().unwrap();

    let user: User = mapper
        .hydrate(&doc! {
            "_id" => "u1",
            "first_name" => "Ada",
            "favourite_colour" => "green",
            "secret" => "leaked",
            "legacy" => doc! { "nested" => true },
        })
        .unwrap();

    assert_eq!(
        user,
        User {
            id: Some("u1".to_string()),
            first_name: Some("Ada".to_string()),
            ..User::default()
        }
    );
}

#[test]
fn null_values_are_not_assigned() {
    let mapper = builder().build_strict().unwrap();

    let mut user = User {
        age: Some(36),
        address: Some(Address::new("1 Main Street", "Paris")),
        ..User::default()
    };

    mapper
        .hydrate_into(
            &mut user,
            &doc! { "_id" => "u1", "age" => Value::Null, "address" => Value::Null },
        )
        .unwrap();

    assert_eq!(user.age, Some(36));
    assert_eq!(user.address, Some(Address::new("1 Main Street", "Paris")));
}

#[test]
fn document_without_identifier_is_rejected() {
    let mapper = builder().build_strict().unwrap();

    assert_err!(
        mapper.hydrate::<User>(&doc! { "first_name" => "Ada" }),
        is_missing_identifier
    );

    assert_err!(
        mapper.hydrate::<User>(&doc! { "_id" => Value::Null }),
        is_missing_identifier
    );

    let mut user = User::default();
    assert_err!(
        mapper.hydrate_into(&mut user, &Document::new()),
        is_missing_identifier
    );
}

#[test]
fn type_without_identifier_is_rejected() {
    let mapper = builder().build_strict().unwrap();

    assert_err!(
        mapper.hydrate::<Anonymous>(&doc! { "_id" => "x", "name" => "nobody" }),
        is_missing_identifier
    );
}

#[test]
fn type_without_constructor_is_rejected() {
    let mapper = builder().build_strict().unwrap();

    let err = assert_err!(
        mapper.hydrate::<Session>(&doc! { "_id" => "s1", "token" => "abc" }),
        is_unsupported_type
    );
    assert_eq!(
        err.to_string(),
        "unsupported type `app::Session`: cannot be constructed without arguments"
    );
}

#[test]
fn hydrate_by_class_name() {
    let mapper = builder().build_strict().unwrap();

    let model = mapper
        .hydrate_class("app::Counter", &doc! { "_id" => 42 })
        .unwrap();

    assert!(model.is::<Counter>());
    assert_eq!(model.downcast::<Counter>().unwrap(), Counter { id: Some(42) });
}

#[test]
fn field_under_the_identifier_key_is_never_hydrated() {
    let mapper = builder().build_strict().unwrap();

    assert_err!(
        mapper.hydrate::<Item>(&doc! { "_id" => "real-id" }),
        is_invalid_metadata
    );
}

#[test]
fn unregistered_class_is_unsupported() {
    let strict = builder().build_strict().unwrap();
    let reflective = builder().build_reflective();
    let document = doc! { "_id" => "x" };

    let err = assert_err!(
        strict.hydrate_class("app::Unknown", &document),
        is_unsupported_type
    );
    assert_eq!(
        err.to_string(),
        "unsupported type `app::Unknown`: not registered"
    );

    assert_err!(
        reflective.hydrate_class("app::Unknown", &document),
        is_unsupported_type
    );
}
