use super::Error;

/// A query expected to yield exactly one row yielded more.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    context: Option<Box<str>>,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("too many records")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a single-row query that returned several rows.
    pub fn too_many_records(context: impl Into<String>) -> Error {
        let context = context.into();
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            context: (!context.is_empty()).then(|| context.into()),
        }))
    }

    /// Returns `true` if this error is a too many records error.
    pub fn is_too_many_records(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRecords(_))
    }
}
