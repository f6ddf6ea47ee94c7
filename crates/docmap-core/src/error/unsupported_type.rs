use super::Error;

/// Error when a type cannot be used as a hydrate target.
///
/// This occurs when the type is not registered, or when it was registered
/// without a constructor and so cannot be built from nothing.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    class: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type `{}`: {}", self.class, self.reason)
    }
}

impl Error {
    /// Creates an unsupported type error for `class`.
    pub fn unsupported_type(class: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            class: class.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
