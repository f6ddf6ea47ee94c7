//! Raw mapping metadata, as produced by a [`Parser`] from type declarations.

use crate::{schema::EmbedKind, Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Produces raw field metadata from a type declaration.
///
/// A source is a class name. Parsers that only know some classes report the
/// others as unsupported, and the map builder skips them.
pub trait Parser: Send + Sync + 'static {
    fn supports(&self, source: &str) -> bool;

    fn parse(&self, source: &str) -> Result<Declaration>;
}

/// Everything a parser extracted from one type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully qualified type identity
    pub class: String,

    /// Mapped fields, in declaration order
    pub fields: Vec<FieldMetadata>,
}

/// Raw metadata of a single mapped field. At least one of `key` and
/// `attribute` must be set; the map builder fills in the other.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
}

/// The field holds one or many documents of another mapped type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub kind: EmbedKind,

    /// Class name of the embedded type
    pub target: String,
}

/// A parser over declarations that were produced ahead of time, for example
/// loaded from a JSON file.
#[derive(Debug, Default, Clone)]
pub struct DeclarationSet {
    declarations: IndexMap<String, Declaration>,
}

impl Declaration {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: FieldMetadata) -> Self {
        self.fields.push(field);
        self
    }
}

impl FieldMetadata {
    pub fn attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::default()
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn embed_document(mut self, target: impl Into<String>) -> Self {
        self.embed = Some(Embed {
            kind: EmbedKind::Document,
            target: target.into(),
        });
        self
    }

    pub fn embed_collection(mut self, target: impl Into<String>) -> Self {
        self.embed = Some(Embed {
            kind: EmbedKind::Collection,
            target: target.into(),
        });
        self
    }
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations
            .insert(declaration.class.clone(), declaration);
        self
    }

    /// Loads a JSON array of declarations.
    pub fn from_json(json: &str) -> Result<Self> {
        let declarations: Vec<Declaration> = serde_json::from_str(json)?;
        Ok(declarations.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.declarations.keys().map(String::as_str)
    }
}

impl FromIterator<Declaration> for DeclarationSet {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        let mut set = Self::new();
        for declaration in iter {
            set.insert(declaration);
        }
        set
    }
}

impl Parser for DeclarationSet {
    fn supports(&self, source: &str) -> bool {
        self.declarations.contains_key(source)
    }

    fn parse(&self, source: &str) -> Result<Declaration> {
        self.declarations
            .get(source)
            .cloned()
            .ok_or_else(|| Error::invalid_metadata(format!("no declaration for `{source}`")))
    }
}
