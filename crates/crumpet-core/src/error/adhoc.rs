/// A free-form error: a context message or a bridged foreign error.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
    source: Option<anyhow::Error>,
}

impl AdhocError {
    pub(super) fn new(message: String) -> AdhocError {
        AdhocError {
            message: message.into(),
            source: None,
        }
    }

    pub(super) fn from_args(args: core::fmt::Arguments<'_>) -> AdhocError {
        AdhocError::new(args.to_string())
    }

    pub(super) fn from_anyhow(err: anyhow::Error) -> AdhocError {
        AdhocError {
            message: err.to_string().into(),
            source: Some(err),
        }
    }

    pub(super) fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
