use super::{AnyModel, Model};
use crate::{Error, Result, Value};

use indexmap::IndexMap;

/// A model attribute value, as read through an accessor or handed to a
/// mutator.
#[derive(Debug, Default, Clone)]
pub enum Attr {
    #[default]
    Null,

    Bool(bool),

    I64(i64),

    F64(f64),

    String(String),

    Binary(Vec<u8>),

    /// An ordered list of attribute values
    List(Vec<Attr>),

    /// A string-keyed map of attribute values
    Map(IndexMap<String, Attr>),

    /// A nested model instance
    Object(Box<dyn AnyModel>),

    /// A value that has no document representation (a handle, a closure, a
    /// connection...). Carries a description for error reporting.
    Opaque(&'static str),
}

impl Attr {
    pub fn object<T: Model>(model: T) -> Self {
        Self::Object(Box::new(model))
    }

    pub fn objects<T: Model>(models: impl IntoIterator<Item = T>) -> Self {
        Self::List(models.into_iter().map(Self::object).collect())
    }

    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(bytes.into())
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::I64(_) | Self::F64(_) | Self::String(_) | Self::Binary(_)
        )
    }

    pub fn as_object(&self) -> Option<&dyn AnyModel> {
        match self {
            Self::Object(model) => Some(&**model),
            _ => None,
        }
    }

    /// Name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Binary(_) => "Binary",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Object(model) => model.class(),
            Self::Opaque(description) => *description,
        }
    }

    pub fn into_model<T: Model>(self) -> Result<T> {
        match self {
            Self::Object(model) => model.downcast(),
            other => Err(Error::type_conversion(other.kind_name(), T::class_name())),
        }
    }

    pub fn into_models<T: Model>(self) -> Result<Vec<T>> {
        match self {
            Self::List(items) => items.into_iter().map(Self::into_model).collect(),
            other => Err(Error::type_conversion(other.kind_name(), "List")),
        }
    }

    /// Converts a nullable attribute; `Null` becomes `None`.
    pub fn into_option<T>(self) -> Result<Option<T>>
    where
        T: TryFrom<Attr, Error = Error>,
    {
        match self {
            Self::Null => Ok(None),
            other => T::try_from(other).map(Some),
        }
    }

    pub fn into_list<T>(self) -> Result<Vec<T>>
    where
        T: TryFrom<Attr, Error = Error>,
    {
        match self {
            Self::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(Error::type_conversion(other.kind_name(), "List")),
        }
    }
}

impl From<bool> for Attr {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Attr {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Attr {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<u32> for Attr {
    fn from(src: u32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Attr {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Attr {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Attr {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Attr {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl<T: Into<Attr>> From<Option<T>> for Attr {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Attr>> From<Vec<T>> for Attr {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

/// Document values assigned to a model as-is: nested documents become maps
/// and arrays become lists.
impl From<Value> for Attr {
    fn from(src: Value) -> Self {
        match src {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(v),
            Value::I64(v) => Self::I64(v),
            Value::F64(v) => Self::F64(v),
            Value::String(v) => Self::String(v),
            Value::Binary(v) => Self::Binary(v),
            Value::Document(document) => Self::Map(
                document
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
        }
    }
}

impl TryFrom<Attr> for bool {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::Bool(v) => Ok(v),
            other => Err(Error::type_conversion(other.kind_name(), "bool")),
        }
    }
}

impl TryFrom<Attr> for i64 {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::I64(v) => Ok(v),
            other => Err(Error::type_conversion(other.kind_name(), "i64")),
        }
    }
}

impl TryFrom<Attr> for i32 {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion("I64", "i32")),
            other => Err(Error::type_conversion(other.kind_name(), "i32")),
        }
    }
}

impl TryFrom<Attr> for f64 {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::F64(v) => Ok(v),
            Attr::I64(v) => Ok(v as f64),
            other => Err(Error::type_conversion(other.kind_name(), "f64")),
        }
    }
}

impl TryFrom<Attr> for String {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::String(v) => Ok(v),
            other => Err(Error::type_conversion(other.kind_name(), "String")),
        }
    }
}

impl TryFrom<Attr> for Vec<u8> {
    type Error = Error;

    fn try_from(src: Attr) -> Result<Self> {
        match src {
            Attr::Binary(v) => Ok(v),
            other => Err(Error::type_conversion(other.kind_name(), "Binary")),
        }
    }
}
