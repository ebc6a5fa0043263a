mod builder;
pub use builder::Builder;

use crate::{
    stmt::{self, Statement},
    Model, PreparedStatement, Registry, Result,
};

use crumpet_driver_sqlite::{Connection, Sqlite};
use crumpet_sql::CompiledQuery;
use std::{sync::Arc, time::Duration};

/// A connection to a database together with the models registered for it.
///
/// Statements are compiled against the registry and run on the connection.
/// A `Db` is used from one thread at a time; the registry can be shared
/// between connections with [`Db::connect_with`].
#[derive(Debug)]
pub struct Db {
    connection: Connection,
    registry: Arc<Registry>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Opens a new connection using an already built registry.
    pub fn connect_with(registry: Arc<Registry>, driver: &Sqlite) -> Result<Db> {
        let connection = driver.connect()?;
        connection.set_foreign_keys(true)?;

        Ok(Db::new(connection, registry))
    }

    pub(crate) fn new(connection: Connection, registry: Arc<Registry>) -> Db {
        Db {
            connection,
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A shared handle on the registry, for opening more connections.
    pub fn shared_registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.connection.set_busy_timeout(timeout)
    }

    /// Creates the tables and indices of every registered model that do not
    /// exist yet.
    pub fn push_schema(&self) -> Result<()> {
        self.connection.push_schema(self.registry.schema())
    }

    pub fn drop_tables(&self) -> Result<()> {
        self.connection.drop_tables(self.registry.schema())
    }

    /// Compiles a statement without running it.
    pub fn compile<S: Statement>(&self, stmt: S) -> Result<CompiledQuery> {
        self.registry.compile(stmt)
    }

    pub fn prepare<S: Statement>(&self, stmt: S) -> Result<PreparedStatement<'_, S>> {
        PreparedStatement::new(self, stmt)
    }

    /// Prepares and executes a statement once.
    pub fn execute<S: Statement>(&self, stmt: S) -> Result<S::Output> {
        self.prepare(stmt)?.execute()
    }

    /// Runs `f` inside a transaction, committing when it returns `Ok` and
    /// rolling back otherwise. Nested calls use savepoints.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&mut Db) -> Result<T>) -> Result<T> {
        self.connection.begin()?;

        let ret = f(self).and_then(|value| {
            self.connection.commit()?;
            Ok(value)
        });

        if ret.is_err() {
            if let Err(err) = self.connection.rollback() {
                tracing::warn!(error = %err, "failed to roll back transaction");
            }
        }

        ret
    }

    pub fn get_all<M: Model>(&self) -> Result<Vec<M>> {
        self.execute(stmt::get_all::<M>())
    }

    /// Loads the record with primary key `key`, failing with a
    /// record-not-found error when there is none.
    pub fn get<M: Model>(&self, key: M::Key) -> Result<M> {
        self.execute(stmt::get::<M>(key))
    }

    pub fn get_optional<M: Model>(&self, key: M::Key) -> Result<Option<M>> {
        self.execute(stmt::get_optional::<M>(key))
    }

    /// Inserts a record and returns its row id.
    pub fn insert<M: Model>(&self, record: &M) -> Result<i64> {
        self.execute(stmt::insert::insert(record))
    }

    pub fn insert_range<M: Model>(&self, records: &[M]) -> Result<usize> {
        self.execute(stmt::insert::insert_range(records))
    }

    pub fn replace<M: Model>(&self, record: &M) -> Result<i64> {
        self.execute(stmt::insert::replace(record))
    }

    /// Writes every non-key field of `record`. Returns the number of rows
    /// changed, zero when no row has its key.
    pub fn update<M: Model>(&self, record: &M) -> Result<usize> {
        self.execute(stmt::update::update(record))
    }

    pub fn remove<M: Model>(&self, key: M::Key) -> Result<usize> {
        self.execute(stmt::delete::remove::<M>(key))
    }

    pub fn count<M: Model>(&self) -> Result<i64> {
        self.execute(stmt::count::<M>())
    }
}
