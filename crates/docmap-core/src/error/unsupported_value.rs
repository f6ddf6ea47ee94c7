use super::Error;

/// Error when normalize meets a value with no document representation.
#[derive(Debug)]
pub(super) struct UnsupportedValueError {
    description: Box<str>,
}

impl std::error::Error for UnsupportedValueError {}

impl core::fmt::Display for UnsupportedValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "an unexpected value could not be normalized: {}",
            self.description
        )
    }
}

impl Error {
    /// Creates an unsupported value error.
    pub fn unsupported_value(description: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedValue(UnsupportedValueError {
            description: description.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported value error.
    pub fn is_unsupported_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedValue(_)))
    }
}
