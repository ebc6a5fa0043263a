use super::Db;
use crate::{
    schema::{ModelInfo, TableBuilder},
    Model, Registry, Result,
};

use crumpet_core::{
    schema::{self, ModelId},
    Error,
};
use crumpet_driver_sqlite::Sqlite;
use std::{any::Any, collections::HashMap, mem, sync::Arc, time::Duration};

/// Registers models and opens a [`Db`].
///
/// Registration errors are reported by [`Builder::build`] and
/// [`Builder::build_registry`].
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Accessors of each registered model, keyed by model
    models: HashMap<ModelId, Box<dyn Any + Send + Sync>>,

    /// First registration error
    error: Option<Error>,

    busy_timeout: Option<Duration>,

    foreign_keys: bool,
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        if self.error.is_none() {
            if let Err(err) = self.try_register::<M>() {
                self.error = Some(err);
            }
        }

        self
    }

    fn try_register<M: Model>(&mut self) -> Result<()> {
        let mut table = TableBuilder::<M>::new();
        M::declare(&mut table);

        let (table, info): (_, ModelInfo<M>) = table.finish()?;
        let columns = table.columns.len();

        self.core.register(table)?;
        self.models.insert(M::id(), Box::new(info));

        tracing::debug!(model = M::id().name(), table = M::TABLE, columns, "registered model");
        Ok(())
    }

    /// How long a connection waits on a locked database before failing
    /// with a busy error. Unset leaves the engine default.
    pub fn busy_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.busy_timeout = Some(timeout);
        self
    }

    /// Whether the engine enforces foreign keys. On by default.
    pub fn foreign_keys(&mut self, enabled: bool) -> &mut Self {
        self.foreign_keys = enabled;
        self
    }

    /// Validates the registered models and produces a registry that can be
    /// shared between connections.
    pub fn build_registry(&mut self) -> Result<Arc<Registry>> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let schema = mem::take(&mut self.core).build()?;
        let models = mem::take(&mut self.models);

        Ok(Arc::new(Registry::new(schema, models)))
    }

    pub fn build(&mut self, driver: Sqlite) -> Result<Db> {
        let registry = self.build_registry()?;
        let connection = driver.connect()?;

        if let Some(timeout) = self.busy_timeout {
            connection.set_busy_timeout(timeout)?;
        }
        connection.set_foreign_keys(self.foreign_keys)?;

        Ok(Db::new(connection, registry))
    }

    /// Opens the database at `url`: `sqlite::memory:` or `sqlite:<path>`.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Sqlite::new(url)?)
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder {
            core: schema::Builder::default(),
            models: HashMap::new(),
            error: None,
            busy_timeout: None,
            foreign_keys: true,
        }
    }
}
