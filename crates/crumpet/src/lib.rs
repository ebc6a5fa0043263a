pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

mod load;
pub use load::Load;

mod model;
pub use model::Model;

mod prepared;
pub use prepared::PreparedStatement;

pub mod schema;
pub use schema::{Field, Registry};

pub mod stmt;
pub use stmt::{
    count,
    delete::{remove, remove_all},
    func, get, get_all, get_optional,
    insert::{insert, insert_range, replace},
    select,
    update::{update, update_all},
    Expr, IntoExpr, Statement,
};

pub use crumpet_core::{Error, Result};
pub use crumpet_driver_sqlite::Sqlite;
pub use crumpet_sql::{CompiledQuery, TypedValue};
