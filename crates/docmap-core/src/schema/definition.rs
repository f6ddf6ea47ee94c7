use super::Map;
use crate::model::{AnyModel, Attr, Getter, Setter};
use crate::Result;

use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// How a field holds documents of another mapped type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    /// A plain value
    #[default]
    None,

    /// A single embedded document
    Document,

    /// An ordered list of embedded documents
    Collection,
}

/// Mapping of a single field.
#[derive(Clone)]
pub struct Definition {
    /// Document key, e.g. `first_name`
    pub key: String,

    /// Model attribute, e.g. `firstName`
    pub attribute: String,

    /// Name of the read method. `None` when the field is read directly.
    pub accessor: Option<String>,

    /// Name of the write method. `None` when the field is written directly.
    pub mutator: Option<String>,

    pub embed_kind: EmbedKind,

    /// Compiled map of the embedded type; set iff `embed_kind` is not `None`
    pub embedded_map: Option<Arc<Map>>,

    pub(super) read: Getter,
    pub(super) write: Setter,
}

impl Definition {
    pub fn is_embedded(&self) -> bool {
        self.embed_kind != EmbedKind::None
    }

    /// Reads the field's attribute from `model`.
    pub fn read(&self, model: &dyn AnyModel) -> Result<Attr> {
        (self.read)(model)
    }

    /// Writes `value` to the field's attribute on `model`.
    pub fn write(&self, model: &mut dyn AnyModel, value: Attr) -> Result<()> {
        (self.write)(model, value)
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.attribute == other.attribute
            && self.accessor == other.accessor
            && self.mutator == other.mutator
            && self.embed_kind == other.embed_kind
            && self.embedded_map == other.embedded_map
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Definition");
        s.field("key", &self.key)
            .field("attribute", &self.attribute)
            .field("accessor", &self.accessor)
            .field("mutator", &self.mutator)
            .field("embed_kind", &self.embed_kind);

        if let Some(map) = &self.embedded_map {
            s.field("embedded_map", &map.class());
        }

        s.finish()
    }
}
