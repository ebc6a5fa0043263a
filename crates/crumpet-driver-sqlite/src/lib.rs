mod statement;
pub use statement::{Rows, Statement};

mod transaction;
use transaction::TransactionManager;

mod value;
pub(crate) use value::Value;

use crumpet_core::{schema::Schema, Error, Result};
use crumpet_sql as sql;
use rusqlite::{Connection as RusqliteConnection, ErrorCode};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

#[derive(Debug, Clone)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// Accepts `sqlite::memory:` and `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Sqlite> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::configuration(format!("invalid connection URL `{url_str}`: {err}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            ":memory:" => Ok(Sqlite::InMemory),
            "" => Err(Error::configuration(format!(
                "connection URL has no database path; url={url_str}"
            ))),
            path => Ok(Sqlite::File(PathBuf::from(path))),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Sqlite {
        Sqlite::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Sqlite {
        Sqlite::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a new connection. Every in-memory connection is a separate,
    /// empty database.
    pub fn connect(&self) -> Result<Connection> {
        tracing::debug!(url = %self.url(), "opening connection");

        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
    transactions: TransactionManager,
}

impl Connection {
    pub fn in_memory() -> Result<Connection> {
        let connection = RusqliteConnection::open_in_memory().map_err(engine_error)?;
        Ok(Connection::from_rusqlite(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
        let connection = RusqliteConnection::open(path).map_err(engine_error)?;
        Ok(Connection::from_rusqlite(connection))
    }

    fn from_rusqlite(connection: RusqliteConnection) -> Connection {
        Connection {
            connection,
            transactions: TransactionManager::default(),
        }
    }

    /// How long the engine waits on a locked database before reporting busy.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.connection.busy_timeout(timeout).map_err(engine_error)
    }

    pub fn set_foreign_keys(&self, enabled: bool) -> Result<()> {
        self.connection
            .pragma_update(None, "foreign_keys", enabled)
            .map_err(engine_error)
    }

    pub fn foreign_keys(&self) -> Result<bool> {
        self.connection
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .map_err(engine_error)
    }

    /// Compiles `sql` into an engine statement.
    pub fn prepare(&self, sql: &str) -> Result<Statement<'_>> {
        let stmt = self.connection.prepare(sql).map_err(engine_error)?;
        Ok(Statement::new(stmt, &self.connection))
    }

    /// Runs one or more parameterless statements.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::trace!(sql, "executing batch");
        self.connection.execute_batch(sql).map_err(engine_error)
    }

    pub fn last_insert_rowid(&self) -> i64 {
        self.connection.last_insert_rowid()
    }

    /// Rows changed by the most recent statement.
    pub fn changes(&self) -> u64 {
        self.connection.changes()
    }

    /// Creates every table and index in `schema` that does not exist yet.
    pub fn push_schema(&self, schema: &Schema) -> Result<()> {
        for table in &schema.tables {
            tracing::debug!(table = %table.name, "creating table");
            self.execute_ddl(schema, &sql::Statement::create_table(schema, table)?)?;

            for index in &table.indices {
                self.execute_ddl(schema, &sql::Statement::create_index(table, index))?;
            }
        }

        Ok(())
    }

    /// Drops every table in `schema`. Foreign key enforcement is suspended
    /// while the tables are dropped.
    pub fn drop_tables(&self, schema: &Schema) -> Result<()> {
        let foreign_keys = self.foreign_keys()?;
        if foreign_keys {
            self.set_foreign_keys(false)?;
        }

        let mut ret = Ok(());
        for table in schema.tables.iter().rev() {
            tracing::debug!(table = %table.name, "dropping table");
            ret = self.execute_ddl(schema, &sql::Statement::drop_table_if_exists(table));
            if ret.is_err() {
                break;
            }
        }

        if foreign_keys {
            self.set_foreign_keys(true)?;
        }

        ret
    }

    fn execute_ddl(&self, schema: &Schema, stmt: &sql::Statement) -> Result<()> {
        let mut params = Vec::<crumpet_core::stmt::Value>::new();
        let sql = sql::Serializer::new(schema).serialize(stmt, &mut params)?;
        debug_assert!(params.is_empty(), "DDL statements have no parameters");

        self.execute_batch(&sql)
    }

    /// Starts a transaction, or a savepoint when one is already open.
    pub fn begin(&mut self) -> Result<()> {
        let sql = self.transactions.start();
        self.execute_batch(&sql)?;
        self.transactions.push();
        Ok(())
    }

    pub fn commit(&mut self) -> Result<()> {
        let sql = self.transactions.commit()?;
        self.execute_batch(&sql)?;
        self.transactions.pop();
        Ok(())
    }

    pub fn rollback(&mut self) -> Result<()> {
        let sql = self.transactions.rollback()?;

        // SQLite rolls back on its own after some failures.
        if self.transactions.depth() > 1 || !self.connection.is_autocommit() {
            self.execute_batch(&sql)?;
        }

        self.transactions.pop();
        Ok(())
    }

    /// Number of open transaction levels.
    pub fn transaction_depth(&self) -> usize {
        self.transactions.depth()
    }
}

/// Maps an engine failure to a Crumpet error, flagging busy and locked
/// databases as retryable.
pub(crate) fn engine_error(err: rusqlite::Error) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            tracing::warn!(error = %err, "database is busy");
            Error::engine_busy(err)
        }
        _ => Error::engine(err),
    }
}
