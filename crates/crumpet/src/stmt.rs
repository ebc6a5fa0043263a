pub mod delete;
pub use delete::{Remove, RemoveAll};

mod expr;
pub use expr::Expr;

mod fetch;
pub use fetch::{Fetch, One, Optional, Rows};

pub mod func;

pub mod insert;
pub use insert::{Insert, InsertRange, Replace};

mod into_expr;
pub use into_expr::IntoExpr;

mod ops;

mod order_by;
pub use order_by::OrderBy;

mod primitive;
pub use primitive::{Numeric, Primitive, Text};

mod projection;
pub use projection::Projection;

pub mod select;
pub use select::{count, get, get_all, get_optional, select, Select};

mod statement;
pub use statement::Statement;

pub mod update;
pub use update::{Update, UpdateAll};

pub use crumpet_core::stmt::{Type, Value};
