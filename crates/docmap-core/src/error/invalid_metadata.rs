use super::Error;

/// Error when mapping metadata cannot be compiled into a map.
///
/// This occurs when:
/// - A field entry provides neither a key nor an attribute
/// - Two definitions of one map share a key or an attribute
/// - An attribute is neither readable nor writable on the model
/// - An embedded target has no declaration
/// - The embedding graph contains a cycle
///
/// These errors are raised while building maps, before any document is
/// mapped.
#[derive(Debug)]
pub(super) struct InvalidMetadataError {
    message: Box<str>,
}

impl std::error::Error for InvalidMetadataError {}

impl core::fmt::Display for InvalidMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid metadata: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid metadata error.
    pub fn invalid_metadata(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMetadata(InvalidMetadataError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid metadata error.
    pub fn is_invalid_metadata(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidMetadata(_)))
    }
}
