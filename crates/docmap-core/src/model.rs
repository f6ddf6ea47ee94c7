//! Runtime type descriptors for mapped models.
//!
//! A model type describes itself once through [`Model::descriptor`]: its
//! declared fields (with their doc annotations), the accessor and mutator
//! methods it exposes, and how to construct an empty instance. Descriptors are
//! collected in a [`Registry`]; mappers never inspect a type any other way.

mod attr;
pub use attr::Attr;

mod descriptor;
pub use descriptor::{
    Constructor, Descriptor, DescriptorBuilder, FieldAccess, FieldInfo, Getter, MethodInfo,
    MethodKind, Setter, Visibility,
};

mod registry;
pub use registry::Registry;

use crate::{Error, Result};
use std::any::Any;
use std::fmt;

pub trait Model: Any + Send + Sync + Clone + fmt::Debug {
    /// Fully qualified type identity, e.g. `app::User`. Used as the cache key
    /// for the type's compiled map.
    fn class_name() -> &'static str;

    /// Describes the type's fields and methods.
    fn descriptor() -> Descriptor;
}

/// Object-safe view of a [`Model`], implemented for every model type.
pub trait AnyModel: Any + Send + Sync + fmt::Debug {
    /// The model's [`Model::class_name`].
    fn class(&self) -> &'static str;

    fn clone_model(&self) -> Box<dyn AnyModel>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Model> AnyModel for T {
    fn class(&self) -> &'static str {
        T::class_name()
    }

    fn clone_model(&self) -> Box<dyn AnyModel> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn AnyModel {
    pub fn is<T: Model>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Model>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Moves the concrete model out of the box.
    pub fn downcast<T: Model>(self: Box<Self>) -> Result<T> {
        let class = self.class();
        match self.into_any().downcast::<T>() {
            Ok(model) => Ok(*model),
            Err(_) => Err(Error::type_conversion(class, T::class_name())),
        }
    }
}

impl Clone for Box<dyn AnyModel> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}
