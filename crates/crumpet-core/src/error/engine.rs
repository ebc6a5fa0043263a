use super::Error;

/// Error reported by the storage engine.
#[derive(Debug)]
pub(super) struct EngineError {
    inner: Box<dyn std::error::Error + Send + Sync>,
    busy: bool,
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("engine error: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from an engine failure.
    pub fn engine(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Engine(EngineError {
            inner: Box::new(err),
            busy: false,
        }))
    }

    /// Creates an error for an engine that reported busy or locked.
    ///
    /// The caller may retry the operation.
    pub fn engine_busy(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Engine(EngineError {
            inner: Box::new(err),
            busy: true,
        }))
    }

    /// Returns `true` if this error came from the storage engine.
    pub fn is_engine(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Engine(_))
    }

    /// Returns `true` if the engine reported busy or locked.
    pub fn is_busy(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Engine(EngineError { busy: true, .. }))
    }
}
