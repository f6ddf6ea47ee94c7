mod builder;
pub use builder::Builder;

pub mod mapper;
pub use mapper::{Mapper, ReflectiveMapper, StrictMapper};

mod parser;
pub use parser::AnnotationParser;

pub use docmap_core::{
    bail, cache, doc, document, err, format, model, parse, schema, AnyModel, Attr, Cache,
    Document, Error, Formatter, Map, Model, Parser, Registry, Result, Value, ID_ATTRIBUTE, ID_KEY,
};

/// Marker that flags a field as mapped, in the field's doc comment.
pub const DEFAULT_MARKER: &str = "@Document";
