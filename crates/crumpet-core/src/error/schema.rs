use super::Error;

/// A model or field was referenced that the registry does not know about.
#[derive(Debug)]
pub(super) struct SchemaError {
    model: Box<str>,
    field: Option<Box<str>>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "schema error: model `{}` has no registered field `{}`",
                self.model, field
            ),
            None => write!(f, "schema error: model `{}` is not registered", self.model),
        }
    }
}

impl Error {
    /// Creates an error for a model type that was never registered.
    pub fn unknown_model(model: &str) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            model: model.into(),
            field: None,
        }))
    }

    /// Creates an error for a field that is not mapped to a column.
    pub fn unknown_field(model: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            model: model.into(),
            field: Some(field.into()),
        }))
    }

    /// Returns `true` if this error is a schema lookup error.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Schema(_))
    }
}
