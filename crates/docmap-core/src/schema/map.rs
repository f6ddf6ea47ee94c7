use super::{Definition, DefinitionRecord, Identifier, MapRecord};
use crate::model::{AnyModel, Descriptor, Registry};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Compiled mapping of one model type.
#[derive(Clone)]
pub struct Map {
    descriptor: Arc<Descriptor>,

    identifier: Identifier,

    /// Definitions, in declaration order
    definitions: Vec<Definition>,

    /// Document key to definition index
    by_key: IndexMap<String, usize>,

    /// Attribute to definition index
    by_attribute: IndexMap<String, usize>,
}

impl Map {
    /// Binds a record against the model descriptors in `registry`, resolving
    /// every accessor and mutator to a handle. Embedded records are bound
    /// recursively.
    pub fn bind(record: &MapRecord, registry: &Registry) -> Result<Map> {
        record.verify()?;

        let descriptor = registry.descriptor(&record.class)?.clone();
        let identifier = Identifier::resolve(
            &descriptor,
            &record.identifier.accessor,
            &record.identifier.mutator,
        );

        let definitions = record
            .definitions
            .iter()
            .map(|definition| bind_definition(&descriptor, definition, registry))
            .collect::<Result<Vec<_>>>()?;

        let mut by_key = IndexMap::with_capacity(definitions.len());
        let mut by_attribute = IndexMap::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            by_key.insert(definition.key.clone(), index);
            by_attribute.insert(definition.attribute.clone(), index);
        }

        Ok(Map {
            descriptor,
            identifier,
            definitions,
            by_key,
            by_attribute,
        })
    }

    pub fn class(&self) -> &'static str {
        self.descriptor.class()
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn definitions(&self) -> impl ExactSizeIterator<Item = &Definition> + '_ {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definition_for_key(&self, key: &str) -> Option<&Definition> {
        self.by_key.get(key).map(|index| &self.definitions[*index])
    }

    pub fn definition_for_attribute(&self, attribute: &str) -> Option<&Definition> {
        self.by_attribute
            .get(attribute)
            .map(|index| &self.definitions[*index])
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.by_attribute.contains_key(attribute)
    }

    /// Attribute mapped to the document key `key`.
    pub fn attribute_for(&self, key: &str) -> Option<&str> {
        self.definition_for_key(key)
            .map(|definition| definition.attribute.as_str())
    }

    /// Document key mapped to `attribute`.
    pub fn key_for(&self, attribute: &str) -> Option<&str> {
        self.definition_for_attribute(attribute)
            .map(|definition| definition.key.as_str())
    }

    /// Document keys, in declaration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.by_key.keys().map(String::as_str)
    }

    /// Attributes, in declaration order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.by_attribute.keys().map(String::as_str)
    }

    /// Builds an empty instance of the mapped type.
    pub fn construct(&self) -> Result<Box<dyn AnyModel>> {
        self.descriptor.construct()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.class() == other.class()
            && self.identifier.accessor == other.identifier.accessor
            && self.identifier.mutator == other.identifier.mutator
            && self.definitions == other.definitions
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("class", &self.class())
            .field("identifier", &self.identifier)
            .field("definitions", &self.definitions)
            .finish()
    }
}

fn bind_definition(
    descriptor: &Descriptor,
    record: &DefinitionRecord,
    registry: &Registry,
) -> Result<Definition> {
    let field = descriptor
        .field(&record.attribute)
        .and_then(|field| field.access.as_ref());

    let (accessor, read) = match record
        .accessor
        .as_deref()
        .and_then(|name| descriptor.accessor(name).map(|get| (name, get)))
    {
        Some((name, get)) => (Some(name.to_string()), get.clone()),
        None => match field {
            Some(access) => (None, access.get.clone()),
            None => {
                return Err(Error::invalid_metadata(format!(
                    "`{}.{}` cannot be read: no public accessor and the field is not public",
                    descriptor.class(),
                    record.attribute
                )))
            }
        },
    };

    let (mutator, write) = match record
        .mutator
        .as_deref()
        .and_then(|name| descriptor.mutator(name).map(|set| (name, set)))
    {
        Some((name, set)) => (Some(name.to_string()), set.clone()),
        None => match field {
            Some(access) => (None, access.set.clone()),
            None => {
                return Err(Error::invalid_metadata(format!(
                    "`{}.{}` cannot be written: no public mutator and the field is not public",
                    descriptor.class(),
                    record.attribute
                )))
            }
        },
    };

    let embedded_map = record
        .embedded
        .as_deref()
        .map(|embedded| Map::bind(embedded, registry).map(Arc::new))
        .transpose()?;

    Ok(Definition {
        key: record.key.clone(),
        attribute: record.attribute.clone(),
        accessor,
        mutator,
        embed_kind: record.embed_kind,
        embedded_map,
        read,
        write,
    })
}
