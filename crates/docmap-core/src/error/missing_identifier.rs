use super::Error;

/// Error when a type or a document lacks a conforming identifier.
///
/// This occurs when:
/// - A standalone model does not declare an `id` field
/// - The identifier accessor is missing, private, or not an accessor
/// - The identifier mutator is missing, private, or not a mutator
/// - A document handed to hydrate has no `_id` entry
#[derive(Debug)]
pub(super) struct MissingIdentifierError {
    class: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for MissingIdentifierError {}

impl core::fmt::Display for MissingIdentifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`{}` has no usable identifier: {}",
            self.class, self.reason
        )
    }
}

impl Error {
    /// Creates a missing identifier error for `class`.
    pub fn missing_identifier(class: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentifier(MissingIdentifierError {
            class: class.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identifier error.
    pub fn is_missing_identifier(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingIdentifier(_)))
    }
}
