//! `INSERT` and `REPLACE` of whole records.

use super::Statement;
use crate::{Model, PreparedStatement, Registry};

use crumpet_core::{stmt, Result};
use std::fmt;

/// Inserts one record. Executing it returns the row id of the new row.
///
/// An auto-increment key is left for the database to assign.
pub struct Insert<'a, M> {
    record: &'a M,
}

/// Inserts several records with one statement. Executing it returns the
/// number of rows inserted.
pub struct InsertRange<'a, M> {
    records: &'a [M],
}

/// Inserts a record, replacing any row with the same key. Every column is
/// written, including an auto-increment key.
pub struct Replace<'a, M> {
    record: &'a M,
}

pub fn insert<M: Model>(record: &M) -> Insert<'_, M> {
    Insert { record }
}

pub fn insert_range<M: Model>(records: &[M]) -> InsertRange<'_, M> {
    InsertRange { records }
}

pub fn replace<M: Model>(record: &M) -> Replace<'_, M> {
    Replace { record }
}

impl<M: Model> Statement for Insert<'_, M> {
    type Output = i64;

    fn into_untyped(self, registry: &Registry) -> Result<stmt::Statement> {
        let row = registry.model::<M>()?.record(self.record);
        Ok(stmt::Insert::new(M::id(), vec![row]).into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<i64> {
        stmt.run()?;
        Ok(stmt.last_insert_rowid())
    }
}

impl<M: Model> Statement for InsertRange<'_, M> {
    type Output = usize;

    fn into_untyped(self, registry: &Registry) -> Result<stmt::Statement> {
        let info = registry.model::<M>()?;
        let rows = self.records.iter().map(|record| info.record(record)).collect();
        Ok(stmt::Insert::new(M::id(), rows).into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<usize> {
        stmt.run()
    }
}

impl<M: Model> Statement for Replace<'_, M> {
    type Output = i64;

    fn into_untyped(self, registry: &Registry) -> Result<stmt::Statement> {
        let row = registry.model::<M>()?.record(self.record);

        let mut untyped = stmt::Insert::new(M::id(), vec![row]);
        untyped.replace = true;
        Ok(untyped.into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<i64> {
        stmt.run()?;
        Ok(stmt.last_insert_rowid())
    }
}

impl<M: Model + fmt::Debug> fmt::Debug for Insert<'_, M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Insert").field(self.record).finish()
    }
}

impl<M: Model + fmt::Debug> fmt::Debug for Replace<'_, M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Replace").field(self.record).finish()
    }
}
