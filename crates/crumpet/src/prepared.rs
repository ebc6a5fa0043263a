use crate::{
    stmt::{Select, Statement},
    Cursor, Db, Load,
};

use crumpet_core::{stmt, Error, Result};
use crumpet_driver_sqlite as driver;
use crumpet_sql::{CompiledQuery, TypedValue};
use std::{fmt, marker::PhantomData};

/// A statement compiled and parsed once, then executed any number of times.
///
/// Preparing binds the literal values of the statement. They stay bound
/// across executions and can be replaced with [`bind`], [`set_param`] or
/// [`rebind`].
///
/// [`bind`]: PreparedStatement::bind
/// [`set_param`]: PreparedStatement::set_param
/// [`rebind`]: PreparedStatement::rebind
pub struct PreparedStatement<'db, S> {
    db: &'db Db,

    /// Engine statement handle
    stmt: driver::Statement<'db>,

    /// SQL text and the values currently bound
    query: CompiledQuery,

    context: Option<String>,

    _p: PhantomData<fn() -> S>,
}

impl<'db, S: Statement> PreparedStatement<'db, S> {
    pub(crate) fn new(db: &'db Db, stmt: S) -> Result<PreparedStatement<'db, S>> {
        let context = stmt.describe();
        let query = db.registry().compile(stmt)?;

        tracing::debug!(sql = %query.sql, params = query.params.len(), "preparing statement");

        let handle = db.connection().prepare(&query.sql)?;
        if handle.parameter_count() != query.params.len() {
            return Err(Error::bind_count(
                handle.parameter_count(),
                query.params.len(),
            ));
        }

        let mut prepared = PreparedStatement {
            db,
            stmt: handle,
            query,
            context,
            _p: PhantomData,
        };
        prepared.bind_all()?;

        Ok(prepared)
    }

    /// Executes the statement with its current bindings.
    pub fn execute(&mut self) -> Result<S::Output> {
        tracing::trace!(sql = %self.query.sql, "executing statement");
        S::exec(self)
    }

    /// Replaces every bound value, in placeholder order.
    ///
    /// Fails without binding anything when the number of values differs
    /// from the number of placeholders or a value's storage kind does not
    /// fit its slot.
    pub fn bind(&mut self, values: impl IntoIterator<Item = stmt::Value>) -> Result<()> {
        let values: Vec<_> = values.into_iter().collect();

        if values.len() != self.query.params.len() {
            return Err(Error::bind_count(self.query.params.len(), values.len()));
        }

        for (index, (param, value)) in self.query.params.iter().zip(&values).enumerate() {
            if !param.ty.accepts(value) {
                return Err(Error::bind_type(index + 1, &param.ty, value));
            }
        }

        for (param, value) in self.query.params.iter_mut().zip(values) {
            param.value = value;
        }

        self.bind_all()
    }

    /// Replaces the value bound to the 0-based parameter slot `index`.
    pub fn set_param(&mut self, index: usize, value: impl Into<stmt::Value>) -> Result<()> {
        let count = self.query.params.len();
        let Some(param) = self.query.params.get_mut(index) else {
            return Err(Error::bind_index(index + 1, count));
        };

        let value = value.into();
        if !param.ty.accepts(&value) {
            return Err(Error::bind_type(index + 1, &param.ty, &value));
        }

        self.stmt.bind(index + 1, &value)?;
        param.value = value;
        Ok(())
    }

    /// Binds the values of another statement of the same shape, for example
    /// an insert of a different record.
    ///
    /// Fails when `stmt` compiles to different SQL.
    pub fn rebind<T: Statement>(&mut self, stmt: T) -> Result<()> {
        let context = stmt.describe();
        let query = self.db.registry().compile(stmt)?;

        if query.sql != self.query.sql {
            return Err(Error::query_builder(format!(
                "cannot rebind `{}` with a statement compiling to `{}`",
                self.query.sql, query.sql
            )));
        }

        self.query = query;
        self.context = context;
        self.bind_all()
    }

    pub fn sql(&self) -> &str {
        &self.query.sql
    }

    /// The values currently bound, in placeholder order.
    pub fn params(&self) -> &[TypedValue] {
        &self.query.params
    }

    fn bind_all(&mut self) -> Result<()> {
        for (index, param) in self.query.params.iter().enumerate() {
            tracing::trace!(index = index + 1, value = ?param.value, "binding parameter");
            self.stmt.bind(index + 1, &param.value)?;
        }

        Ok(())
    }
}

impl<S> PreparedStatement<'_, S> {
    pub(crate) fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub(crate) fn cursor<R: Load>(&mut self) -> Cursor<'_, R> {
        let registry = self.db.registry();
        Cursor::new(self.stmt.query(), registry)
    }

    /// Runs a statement returning no rows; returns the number of rows changed.
    pub(crate) fn run(&mut self) -> Result<usize> {
        self.stmt.execute()
    }

    pub(crate) fn last_insert_rowid(&self) -> i64 {
        self.stmt.last_insert_rowid()
    }
}

impl<R: Load, F> PreparedStatement<'_, Select<R, F>> {
    /// Executes the query and returns its rows as a lazy sequence.
    ///
    /// Each call starts a fresh execution.
    pub fn iter(&mut self) -> Cursor<'_, R> {
        tracing::trace!(sql = %self.query.sql, "executing query");
        self.cursor()
    }

    /// Executes the query and collects every row.
    pub fn all(&mut self) -> Result<Vec<R>> {
        self.iter().collect()
    }
}

impl<S> fmt::Debug for PreparedStatement<'_, S> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("PreparedStatement")
            .field("sql", &self.query.sql)
            .field("params", &self.query.params)
            .finish()
    }
}
