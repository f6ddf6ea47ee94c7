#[macro_use]
mod macros;

pub mod cache;
pub use cache::Cache;

pub mod document;
pub use document::{Document, Value};

mod error;
pub use error::Error;

pub mod format;
pub use format::Formatter;

pub mod model;
pub use model::{AnyModel, Attr, Model, Registry};

pub mod parse;
pub use parse::Parser;

pub mod schema;
pub use schema::Map;

/// A Result type alias that uses docmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key under which a standalone document stores its identifier.
pub const ID_KEY: &str = "_id";

/// Attribute name of the identifier on every standalone model.
pub const ID_ATTRIBUTE: &str = "id";
