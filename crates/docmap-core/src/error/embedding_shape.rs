use super::Error;

/// Error when an embedded value does not have the shape its definition
/// declares: a document where a collection is expected, or the reverse.
#[derive(Debug)]
pub(super) struct EmbeddingShapeError {
    key: Box<str>,
    expected: &'static str,
    actual: &'static str,
}

impl std::error::Error for EmbeddingShapeError {}

impl core::fmt::Display for EmbeddingShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "embedded `{}` expects {}, found {}",
            self.key, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an embedding shape error for the document key `key`.
    pub fn embedding_shape(
        key: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::EmbeddingShape(EmbeddingShapeError {
            key: key.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an embedding shape error.
    pub fn is_embedding_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EmbeddingShape(_)))
    }
}
