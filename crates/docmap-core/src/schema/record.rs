use super::{Definition, EmbedKind, Map};

use serde::{Deserialize, Serialize};

/// The names-only form of a [`Map`]. Holds everything needed to bind the map
/// again against a registry, and nothing that cannot be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    pub class: String,
    pub identifier: IdentifierRecord,
    pub definitions: Vec<DefinitionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierRecord {
    pub accessor: String,
    pub mutator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub key: String,
    pub attribute: String,

    #[serde(default)]
    pub accessor: Option<String>,

    #[serde(default)]
    pub mutator: Option<String>,

    #[serde(default)]
    pub embed_kind: EmbedKind,

    /// Record of the embedded type, inlined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Box<MapRecord>>,
}

impl Map {
    pub fn to_record(&self) -> MapRecord {
        MapRecord {
            class: self.class().to_string(),
            identifier: IdentifierRecord {
                accessor: self.identifier().accessor.clone(),
                mutator: self.identifier().mutator.clone(),
            },
            definitions: self.definitions().map(DefinitionRecord::from).collect(),
        }
    }
}

impl From<&Definition> for DefinitionRecord {
    fn from(definition: &Definition) -> Self {
        Self {
            key: definition.key.clone(),
            attribute: definition.attribute.clone(),
            accessor: definition.accessor.clone(),
            mutator: definition.mutator.clone(),
            embed_kind: definition.embed_kind,
            embedded: definition
                .embedded_map
                .as_ref()
                .map(|map| Box::new(map.to_record())),
        }
    }
}
