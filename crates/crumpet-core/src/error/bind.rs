use super::Error;
use crate::stmt::{Type, Value};

#[derive(Debug)]
pub(super) enum BindError {
    Count { expected: usize, actual: usize },
    Index { index: usize, count: usize },
    Kind { index: usize, expected: &'static str, actual: &'static str },
}

impl std::error::Error for BindError {}

impl core::fmt::Display for BindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            BindError::Count { expected, actual } => write!(
                f,
                "bind error: expected {expected} parameters, got {actual}"
            ),
            BindError::Index { index, count } => write!(
                f,
                "bind error: parameter {index} is out of range; the statement has {count} parameters"
            ),
            BindError::Kind {
                index,
                expected,
                actual,
            } => write!(
                f,
                "bind error: parameter {index} expects {expected}, got {actual}"
            ),
        }
    }
}

impl Error {
    /// Creates an error for a bind call with the wrong number of values.
    pub fn bind_count(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::Bind(BindError::Count { expected, actual }))
    }

    /// Creates an error for a 1-based parameter index that does not exist.
    pub fn bind_index(index: usize, count: usize) -> Error {
        Error::from(super::ErrorKind::Bind(BindError::Index { index, count }))
    }

    /// Creates an error for a value whose kind does not fit its slot.
    ///
    /// `index` is 1-based, matching the placeholder number.
    pub fn bind_type(index: usize, expected: &Type, actual: &Value) -> Error {
        Error::from(super::ErrorKind::Bind(BindError::Kind {
            index,
            expected: expected.kind().as_str(),
            actual: actual.kind().as_str(),
        }))
    }

    /// Returns `true` if this error was raised while binding parameters.
    pub fn is_bind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Bind(_))
    }
}
