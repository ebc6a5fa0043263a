use super::Error;

/// A statement was composed in a way that cannot be rendered to SQL.
#[derive(Debug)]
pub(super) struct QueryBuilderError {
    message: Box<str>,
}

impl std::error::Error for QueryBuilderError {}

impl core::fmt::Display for QueryBuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates a query builder error.
    ///
    /// Raised by the compiler for malformed clause composition: an update
    /// without assignments, a key with the wrong number of components, a
    /// record whose width does not match its table, or an empty insert
    /// batch.
    pub fn query_builder(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QueryBuilder(QueryBuilderError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a query builder error.
    pub fn is_query_builder(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryBuilder(_))
    }
}
