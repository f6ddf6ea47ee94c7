use super::Error;

/// Error when a cache holds no map for the requested type.
#[derive(Debug)]
pub(super) struct NotFoundError {
    class: Box<str>,
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no map cached for `{}`", self.class)
    }
}

impl Error {
    /// Creates a not found error for `class`.
    pub fn not_found(class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            class: class.into().into(),
        }))
    }

    /// Returns `true` if this error is a not found error.
    pub fn is_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotFound(_)))
    }
}
