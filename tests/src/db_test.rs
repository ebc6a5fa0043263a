use crate::Setup;

use crumpet::{db, Db, Registry};
use std::sync::Arc;

/// Per-test state: the database setup and the registry of the models the
/// test uses.
pub struct DbTest {
    setup: Box<dyn Setup>,
    registry: Option<Arc<Registry>>,
}

impl DbTest {
    pub fn new(setup: Box<dyn Setup>) -> DbTest {
        crate::logging::init();

        DbTest {
            setup,
            registry: None,
        }
    }

    /// Builds the models into a registry, connects and creates the tables.
    pub fn setup_db(&mut self, mut builder: db::Builder) -> Db {
        let registry = builder.build_registry().unwrap();
        self.registry = Some(registry.clone());

        let db = Db::connect_with(registry, &self.setup.driver()).unwrap();
        db.push_schema().unwrap();
        db
    }

    /// Opens another connection to the same database. Only meaningful for
    /// file databases; every in-memory connection is a fresh database.
    pub fn connect(&self) -> Db {
        let registry = self
            .registry
            .clone()
            .expect("`setup_db` must be called first");

        Db::connect_with(registry, &self.setup.driver()).unwrap()
    }

    pub fn setup(&self) -> &dyn Setup {
        &*self.setup
    }
}

impl Drop for DbTest {
    fn drop(&mut self) {
        self.setup.cleanup();
    }
}
