//! Compiled mapping metadata.
//!
//! A [`Map`] describes how one model type corresponds to a document: one
//! [`Definition`] per mapped field, indexed by document key and by attribute
//! name. Maps are compiled by the [`Builder`] from parser declarations,
//! shared behind an `Arc`, and never mutated once built.

mod builder;
pub use builder::Builder;

mod definition;
pub use definition::{Definition, EmbedKind};

mod identifier;
pub use identifier::Identifier;

mod map;
pub use map::Map;

mod record;
pub use record::{DefinitionRecord, IdentifierRecord, MapRecord};

mod verify;
