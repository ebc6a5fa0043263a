mod adhoc;
mod bind;
mod configuration;
mod engine;
mod query_builder;
mod record_not_found;
mod schema;
mod too_many_records;
mod type_mismatch;

use adhoc::AdhocError;
use bind::BindError;
use configuration::ConfigurationError;
use engine::EngineError;
use query_builder::QueryBuilderError;
use record_not_found::RecordNotFoundError;
use schema::SchemaError;
use std::sync::Arc;
use too_many_records::TooManyRecordsError;
use type_mismatch::TypeMismatchError;

/// Return early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Build an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Crumpet.
///
/// Each failure mode of the ORM maps to one kind, queried with the `is_*`
/// predicates. Errors are cheap to clone and can carry a chain of context
/// messages added with [`Error::context`].
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Bind(BindError),
    Configuration(ConfigurationError),
    Engine(EngineError),
    QueryBuilder(QueryBuilderError),
    RecordNotFound(RecordNotFoundError),
    Schema(SchemaError),
    TooManyRecords(TooManyRecordsError),
    TypeMismatch(TypeMismatchError),
}

impl Error {
    /// Adds a context message on top of this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause. The kind predicates always answer for the root cause.
    pub fn context(self, message: impl core::fmt::Display) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::new(message.to_string())),
                cause: Some(self),
            }),
        }
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.inner.cause {
            err = cause;
        }
        err
    }

    fn kind(&self) -> &ErrorKind {
        &self.root().inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::Engine(err) => std::error::Error::source(err),
            ErrorKind::Adhoc(err) if self.inner.cause.is_none() => err.source(),
            _ => self
                .inner
                .cause
                .as_ref()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(&err.inner.kind, f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Bind(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            Engine(err) => core::fmt::Display::fmt(err, f),
            QueryBuilder(err) => core::fmt::Display::fmt(err, f),
            RecordNotFound(err) => core::fmt::Display::fmt(err, f),
            Schema(err) => core::fmt::Display::fmt(err, f),
            TooManyRecords(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_anyhow(err)))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}
