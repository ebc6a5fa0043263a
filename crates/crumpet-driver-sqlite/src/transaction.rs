use crumpet_core::{err, Result};
use std::borrow::Cow;

/// Tracks transaction nesting and produces the SQL that opens and closes each
/// level. The outermost level is a real transaction; inner levels are
/// savepoints.
#[derive(Debug, Default)]
pub(crate) struct TransactionManager {
    depth: usize,
}

impl TransactionManager {
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `BEGIN` or `SAVEPOINT sp_N`.
    pub(crate) fn start(&self) -> Cow<'static, str> {
        match self.depth {
            0 => Cow::Borrowed("BEGIN"),
            depth => Cow::Owned(format!("SAVEPOINT sp_{depth}")),
        }
    }

    /// Returns `COMMIT` or `RELEASE sp_N` for the innermost level.
    pub(crate) fn commit(&self) -> Result<Cow<'static, str>> {
        match self.depth {
            0 => Err(err!("cannot commit; no transaction is active")),
            1 => Ok(Cow::Borrowed("COMMIT")),
            depth => Ok(Cow::Owned(format!("RELEASE sp_{}", depth - 1))),
        }
    }

    /// Returns `ROLLBACK` or the statements that undo and discard the
    /// innermost savepoint.
    pub(crate) fn rollback(&self) -> Result<Cow<'static, str>> {
        match self.depth {
            0 => Err(err!("cannot roll back; no transaction is active")),
            1 => Ok(Cow::Borrowed("ROLLBACK")),
            depth => {
                let savepoint = depth - 1;
                Ok(Cow::Owned(format!(
                    "ROLLBACK TO sp_{savepoint}; RELEASE sp_{savepoint}"
                )))
            }
        }
    }

    pub(crate) fn push(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
