use super::Error;
use crate::stmt::Value;

/// A stored value could not be decoded into the requested Rust type.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    value: Value,
    to_type: &'static str,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: cannot convert {} value to {}",
            self.value.kind().as_str(),
            self.to_type
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(value: impl Into<Value>, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            value: value.into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
