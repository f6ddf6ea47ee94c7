//! Naming conventions between document keys and model attributes.

use std_util::str::{camelize, lcfirst, snake_case, ucfirst, uncamelize};

/// Converts names between the document side and the model side.
///
/// Implementations are pure: the same input always yields the same output
/// and no state is carried between calls.
pub trait Formatter: Send + Sync + 'static {
    /// Document key for a model attribute.
    fn to_document_key(&self, attribute: &str) -> String;

    /// Model attribute for a document key.
    fn to_attribute(&self, key: &str) -> String;

    /// Name of the zero-argument method reading `attribute`.
    fn accessor_name(&self, attribute: &str) -> String;

    /// Name of the single-argument method writing `attribute`.
    fn mutator_name(&self, attribute: &str) -> String;
}

/// `first_name` keys, `firstName` attributes, `getFirstName` / `setFirstName`
/// methods.
#[derive(Debug, Default, Clone, Copy)]
pub struct CamelCaseFormatter;

impl Formatter for CamelCaseFormatter {
    fn to_document_key(&self, attribute: &str) -> String {
        uncamelize(attribute)
    }

    fn to_attribute(&self, key: &str) -> String {
        lcfirst(&camelize(key))
    }

    fn accessor_name(&self, attribute: &str) -> String {
        format!("get{}", ucfirst(attribute))
    }

    fn mutator_name(&self, attribute: &str) -> String {
        format!("set{}", ucfirst(attribute))
    }
}

/// Attributes named the way Rust names fields: `first_name` on both sides,
/// read by `first_name()` and written by `set_first_name()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCaseFormatter;

impl Formatter for SnakeCaseFormatter {
    fn to_document_key(&self, attribute: &str) -> String {
        snake_case(attribute)
    }

    fn to_attribute(&self, key: &str) -> String {
        snake_case(key)
    }

    fn accessor_name(&self, attribute: &str) -> String {
        attribute.to_string()
    }

    fn mutator_name(&self, attribute: &str) -> String {
        format!("set_{attribute}")
    }
}
