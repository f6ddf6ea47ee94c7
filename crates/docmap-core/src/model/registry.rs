use super::{Descriptor, Model};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Descriptors of every model type known to a mapper, keyed by class name.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    descriptors: IndexMap<&'static str, Arc<Descriptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T`. Registering the same type twice replaces the earlier
    /// descriptor.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.insert(T::descriptor());
        self
    }

    pub fn insert(&mut self, descriptor: Descriptor) {
        log::trace!("registering model; class={}", descriptor.class());
        self.descriptors
            .insert(descriptor.class(), Arc::new(descriptor));
    }

    pub fn contains(&self, class: &str) -> bool {
        self.descriptors.contains_key(class)
    }

    pub fn get(&self, class: &str) -> Option<&Arc<Descriptor>> {
        self.descriptors.get(class)
    }

    /// Like [`Registry::get`], failing with an unsupported type error for
    /// classes that were never registered.
    pub fn descriptor(&self, class: &str) -> Result<&Arc<Descriptor>> {
        self.get(class)
            .ok_or_else(|| Error::unsupported_type(class, "not registered"))
    }

    /// Registered class names, in registration order.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.descriptors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
