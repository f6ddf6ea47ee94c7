use crate::model::{AnyModel, Attr, Descriptor, Getter, Setter};
use crate::{Error, Result, ID_ATTRIBUTE};

use std::fmt;

/// Access to the `id` attribute of a model.
///
/// Every map carries one, resolved when the map is bound. Standalone
/// documents require both handles; embedded documents use whichever the type
/// provides.
#[derive(Clone)]
pub struct Identifier {
    class: &'static str,

    /// Name of the accessor the formatter computed for `id`
    pub accessor: String,

    /// Name of the mutator the formatter computed for `id`
    pub mutator: String,

    declared: bool,
    get: Option<Getter>,
    set: Option<Setter>,
}

impl Identifier {
    pub(crate) fn resolve(descriptor: &Descriptor, accessor: &str, mutator: &str) -> Self {
        let declared = descriptor.has_field(ID_ATTRIBUTE);

        Self {
            class: descriptor.class(),
            accessor: accessor.to_string(),
            mutator: mutator.to_string(),
            declared,
            get: declared
                .then(|| descriptor.accessor(accessor).cloned())
                .flatten(),
            set: declared
                .then(|| descriptor.mutator(mutator).cloned())
                .flatten(),
        }
    }

    /// Returns `true` if the identifier can be both read and written.
    pub fn is_conforming(&self) -> bool {
        self.get.is_some() && self.set.is_some()
    }

    pub fn is_readable(&self) -> bool {
        self.get.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    /// Reads the identifier, failing if the type has no public accessor for
    /// it.
    pub fn read(&self, model: &dyn AnyModel) -> Result<Attr> {
        match &self.get {
            Some(get) => get(model),
            None => Err(self.missing(&self.accessor, "accessor")),
        }
    }

    /// Writes the identifier, failing if the type has no public mutator for
    /// it.
    pub fn write(&self, model: &mut dyn AnyModel, value: Attr) -> Result<()> {
        match &self.set {
            Some(set) => set(model, value),
            None => Err(self.missing(&self.mutator, "mutator")),
        }
    }

    /// Fails unless the identifier is conforming.
    pub fn require(&self) -> Result<()> {
        if self.get.is_none() {
            return Err(self.missing(&self.accessor, "accessor"));
        }

        if self.set.is_none() {
            return Err(self.missing(&self.mutator, "mutator"));
        }

        Ok(())
    }

    fn missing(&self, method: &str, what: &str) -> Error {
        if !self.declared {
            Error::missing_identifier(self.class, format!("no `{ID_ATTRIBUTE}` field"))
        } else {
            Error::missing_identifier(self.class, format!("no public {what} `{method}`"))
        }
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identifier")
            .field("accessor", &self.accessor)
            .field("mutator", &self.mutator)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}
