use crate::{engine_error, Value};

use crumpet_core::{stmt, Error, Result};

/// A compiled engine statement. Finalized when dropped.
///
/// Bindings survive execution, so a statement can be executed again with
/// the same values or have individual slots rebound.
#[derive(Debug)]
pub struct Statement<'c> {
    stmt: rusqlite::Statement<'c>,
    connection: &'c rusqlite::Connection,
}

/// Rows produced by one execution of a query statement.
///
/// The statement is reset when the rows are dropped.
pub struct Rows<'s> {
    rows: rusqlite::Rows<'s>,
    width: usize,
}

impl<'c> Statement<'c> {
    pub(crate) fn new(
        stmt: rusqlite::Statement<'c>,
        connection: &'c rusqlite::Connection,
    ) -> Statement<'c> {
        Statement { stmt, connection }
    }

    /// Number of `?N` parameters in the statement.
    pub fn parameter_count(&self) -> usize {
        self.stmt.parameter_count()
    }

    /// Number of columns in each result row. Zero for statements that do not
    /// return rows.
    pub fn column_count(&self) -> usize {
        self.stmt.column_count()
    }

    pub fn returns_rows(&self) -> bool {
        self.column_count() > 0
    }

    /// Binds `value` to the 1-based parameter `index`.
    pub fn bind(&mut self, index: usize, value: &stmt::Value) -> Result<()> {
        if index == 0 || index > self.parameter_count() {
            return Err(Error::bind_index(index, self.parameter_count()));
        }

        self.stmt
            .raw_bind_parameter(index, Value(value))
            .map_err(engine_error)
    }

    /// Runs the statement with its current bindings and returns the result
    /// rows.
    pub fn query(&mut self) -> Rows<'_> {
        let width = self.stmt.column_count();

        Rows {
            rows: self.stmt.raw_query(),
            width,
        }
    }

    /// Runs a statement that returns no rows and reports how many rows it
    /// changed.
    pub fn execute(&mut self) -> Result<usize> {
        self.stmt.raw_execute().map_err(engine_error)
    }

    /// Row id of the most recent successful insert on the connection.
    pub fn last_insert_rowid(&self) -> i64 {
        self.connection.last_insert_rowid()
    }
}

impl Rows<'_> {
    /// Steps to the next row, returning its raw column values.
    pub fn next(&mut self) -> Result<Option<Vec<stmt::Value>>> {
        let Some(row) = self.rows.next().map_err(engine_error)? else {
            return Ok(None);
        };

        let mut values = Vec::with_capacity(self.width);
        for index in 0..self.width {
            let value = row.get_ref(index).map_err(engine_error)?;
            values.push(Value::load(value)?);
        }

        Ok(Some(values))
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
