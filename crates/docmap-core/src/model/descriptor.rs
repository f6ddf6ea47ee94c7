use super::{AnyModel, Attr, Model};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::{fmt, marker::PhantomData, sync::Arc};

/// Reads an attribute from a model.
pub type Getter = Arc<dyn Fn(&dyn AnyModel) -> Result<Attr> + Send + Sync>;

/// Writes an attribute on a model.
pub type Setter = Arc<dyn Fn(&mut dyn AnyModel, Attr) -> Result<()> + Send + Sync>;

/// Builds an empty instance of a model.
pub type Constructor = Arc<dyn Fn() -> Box<dyn AnyModel> + Send + Sync>;

/// Everything the mappers know about one model type.
#[derive(Clone)]
pub struct Descriptor {
    class: &'static str,

    /// Set when the type can be built without arguments
    constructor: Option<Constructor>,

    /// Declared fields, in declaration order
    fields: IndexMap<String, FieldInfo>,

    /// Declared methods, by name
    methods: IndexMap<String, MethodInfo>,
}

#[derive(Clone)]
pub struct FieldInfo {
    pub name: String,

    /// Doc comment attached to the field. Mapping annotations live here.
    pub doc: Option<String>,

    /// Direct access, present only for public fields
    pub access: Option<FieldAccess>,
}

#[derive(Clone)]
pub struct FieldAccess {
    pub get: Getter,
    pub set: Setter,
}

#[derive(Clone)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub kind: MethodKind,
}

#[derive(Clone)]
pub enum MethodKind {
    /// Takes no argument and returns the attribute
    Accessor(Getter),

    /// Takes the new attribute value as its single argument
    Mutator(Setter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Typed builder for a [`Descriptor`]. Closures take the concrete model type;
/// the builder erases them into [`Getter`] and [`Setter`] handles.
pub struct DescriptorBuilder<T> {
    descriptor: Descriptor,
    _p: PhantomData<fn() -> T>,
}

impl Descriptor {
    pub fn builder<T: Model>() -> DescriptorBuilder<T> {
        DescriptorBuilder {
            descriptor: Descriptor {
                class: T::class_name(),
                constructor: None,
                fields: IndexMap::new(),
                methods: IndexMap::new(),
            },
            _p: PhantomData,
        }
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Builds an empty instance of the type.
    pub fn construct(&self) -> Result<Box<dyn AnyModel>> {
        match &self.constructor {
            Some(constructor) => Ok(constructor()),
            None => Err(Error::unsupported_type(
                self.class,
                "cannot be constructed without arguments",
            )),
        }
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldInfo> + '_ {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.get(name)
    }

    /// Returns the getter of `name` if it is a public accessor.
    pub fn accessor(&self, name: &str) -> Option<&Getter> {
        self.method(name).and_then(MethodInfo::as_accessor)
    }

    /// Returns the setter of `name` if it is a public mutator.
    pub fn mutator(&self, name: &str) -> Option<&Setter> {
        self.method(name).and_then(MethodInfo::as_mutator)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("class", &self.class)
            .field("constructible", &self.is_constructible())
            .field("fields", &self.fields.values().collect::<Vec<_>>())
            .field("methods", &self.methods.values().collect::<Vec<_>>())
            .finish()
    }
}

impl FieldInfo {
    pub fn is_public(&self) -> bool {
        self.access.is_some()
    }

    /// Returns `true` if the field's doc comment contains `marker`.
    pub fn is_marked(&self, marker: &str) -> bool {
        self.doc.as_deref().is_some_and(|doc| doc.contains(marker))
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("public", &self.is_public())
            .finish()
    }
}

impl MethodInfo {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Public and taking no argument.
    pub fn as_accessor(&self) -> Option<&Getter> {
        match &self.kind {
            MethodKind::Accessor(get) if self.is_public() => Some(get),
            _ => None,
        }
    }

    /// Public and taking exactly one argument.
    pub fn as_mutator(&self) -> Option<&Setter> {
        match &self.kind {
            MethodKind::Mutator(set) if self.is_public() => Some(set),
            _ => None,
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MethodKind::Accessor(_) => "accessor",
            MethodKind::Mutator(_) => "mutator",
        };

        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("kind", &kind)
            .finish()
    }
}

impl<T: Model> DescriptorBuilder<T> {
    pub fn constructor(mut self, f: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.descriptor.constructor = Some(Arc::new(move || Box::new(f()) as Box<dyn AnyModel>));
        self
    }

    pub fn default_constructor(self) -> Self
    where
        T: Default,
    {
        self.constructor(T::default)
    }

    /// Declares a field that is only reachable through methods. An empty
    /// `doc` means the field is undocumented.
    pub fn field(mut self, name: &str, doc: &str) -> Self {
        self.push_field(name, doc, None);
        self
    }

    /// Declares a public field, readable and writable directly.
    pub fn public_field(
        mut self,
        name: &str,
        doc: &str,
        get: impl Fn(&T) -> Attr + Send + Sync + 'static,
        set: impl Fn(&mut T, Attr) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        let access = FieldAccess {
            get: erase_getter(get),
            set: erase_setter(set),
        };
        self.push_field(name, doc, Some(access));
        self
    }

    pub fn accessor(self, name: &str, f: impl Fn(&T) -> Attr + Send + Sync + 'static) -> Self {
        self.method(name, Visibility::Public, MethodKind::Accessor(erase_getter(f)))
    }

    pub fn private_accessor(
        self,
        name: &str,
        f: impl Fn(&T) -> Attr + Send + Sync + 'static,
    ) -> Self {
        self.method(name, Visibility::Private, MethodKind::Accessor(erase_getter(f)))
    }

    pub fn mutator(
        self,
        name: &str,
        f: impl Fn(&mut T, Attr) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.method(name, Visibility::Public, MethodKind::Mutator(erase_setter(f)))
    }

    pub fn private_mutator(
        self,
        name: &str,
        f: impl Fn(&mut T, Attr) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.method(name, Visibility::Private, MethodKind::Mutator(erase_setter(f)))
    }

    pub fn build(self) -> Descriptor {
        self.descriptor
    }

    fn method(mut self, name: &str, visibility: Visibility, kind: MethodKind) -> Self {
        self.descriptor.methods.insert(
            name.to_string(),
            MethodInfo {
                name: name.to_string(),
                visibility,
                kind,
            },
        );
        self
    }

    fn push_field(&mut self, name: &str, doc: &str, access: Option<FieldAccess>) {
        let doc = (!doc.trim().is_empty()).then(|| doc.to_string());
        self.descriptor.fields.insert(
            name.to_string(),
            FieldInfo {
                name: name.to_string(),
                doc,
                access,
            },
        );
    }
}

fn erase_getter<T: Model>(f: impl Fn(&T) -> Attr + Send + Sync + 'static) -> Getter {
    Arc::new(move |model: &dyn AnyModel| match model.downcast_ref::<T>() {
        Some(model) => Ok(f(model)),
        None => Err(Error::type_conversion(model.class(), T::class_name())),
    })
}

fn erase_setter<T: Model>(f: impl Fn(&mut T, Attr) -> Result<()> + Send + Sync + 'static) -> Setter {
    Arc::new(move |model: &mut dyn AnyModel, value: Attr| {
        let class = model.class();
        match model.downcast_mut::<T>() {
            Some(model) => f(model, value),
            None => Err(Error::type_conversion(class, T::class_name())),
        }
    })
}
