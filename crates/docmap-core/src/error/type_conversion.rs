use super::Error;

/// Error when a value cannot be converted to the type a model field expects.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from_type: &'static str,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from_type, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    pub fn type_conversion(from_type: &'static str, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from_type,
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
