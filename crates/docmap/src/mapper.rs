//! Conversion between models and documents.
//!
//! Two strategies implement [`Mapper`]. [`ReflectiveMapper`] reads a model's
//! registered descriptor and doc annotations on every call. [`StrictMapper`]
//! compiles a [`Map`](crate::Map) per type once, caches it, and drives every
//! conversion from it, including embedded documents and collections.

mod reflective;
pub use reflective::ReflectiveMapper;

mod strict;
pub use strict::StrictMapper;

use docmap_core::{AnyModel, Attr, Document, Error, Model, Result, Value, ID_KEY};

pub trait Mapper {
    /// Converts a model to its document.
    ///
    /// The identifier is stored under `_id`, ahead of every other key. When
    /// every other value is null the document is empty, `_id` included.
    fn to_document(&self, model: &dyn AnyModel) -> Result<Document>;

    /// Assigns the values of `document` to an existing model.
    fn hydrate_into(&self, model: &mut dyn AnyModel, document: &Document) -> Result<()>;

    /// Builds a new instance of `class` from `document`.
    fn hydrate_class(&self, class: &str, document: &Document) -> Result<Box<dyn AnyModel>>;

    /// Builds a new `T` from `document`.
    fn hydrate<T: Model>(&self, document: &Document) -> Result<T>
    where
        Self: Sized,
    {
        self.hydrate_class(T::class_name(), document)?.downcast()
    }

    /// Converts any attribute value to its document value.
    ///
    /// Null and scalars are returned unchanged, models become documents, and
    /// lists and maps are converted element by element, keeping their order.
    fn normalize(&self, value: &Attr) -> Result<Value> {
        Ok(match value {
            Attr::Null => Value::Null,
            Attr::Bool(v) => Value::Bool(*v),
            Attr::I64(v) => Value::I64(*v),
            Attr::F64(v) => Value::F64(*v),
            Attr::String(v) => Value::String(v.clone()),
            Attr::Binary(v) => Value::Binary(v.clone()),
            Attr::Object(model) => Value::Document(self.to_document(&**model)?),
            Attr::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.normalize(item))
                    .collect::<Result<_>>()?,
            ),
            Attr::Map(entries) => Value::Document(
                entries
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), self.normalize(value)?)))
                    .collect::<Result<_>>()?,
            ),
            Attr::Opaque(description) => return Err(Error::unsupported_value(*description)),
        })
    }
}

/// Empties `document` when every value besides `_id` is null.
fn collapse_if_all_null(document: &mut Document) {
    let all_null = document
        .iter()
        .filter(|(key, _)| *key != ID_KEY)
        .all(|(_, value)| value.is_null());

    if all_null {
        document.clear();
    }
}

/// The `_id` of a standalone document. Null counts as absent.
fn document_id<'a>(class: &str, document: &'a Document) -> Result<&'a Value> {
    match document.get(ID_KEY) {
        Some(id) if !id.is_null() => Ok(id),
        _ => Err(Error::missing_identifier(class, "document has no `_id`")),
    }
}
