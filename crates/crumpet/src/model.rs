use crate::schema::TableBuilder;

use crumpet_core::{schema::ModelId, stmt};
use std::fmt;

/// A record type stored in its own table.
///
/// Implementations declare the table name and, in [`Model::declare`], one
/// column per field together with the accessors used to read a field when
/// writing a record and to assign it when loading one.
///
/// ```ignore
/// #[derive(Debug, Default)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl User {
///     const ID: Field<User, i64> = Field::new("id");
///     const NAME: Field<User, String> = Field::new("name");
/// }
///
/// impl Model for User {
///     type Key = i64;
///     const TABLE: &'static str = "users";
///
///     fn declare(table: &mut TableBuilder<Self>) {
///         table
///             .column(User::ID, |u| &u.id, |u| &mut u.id)
///             .primary_key()
///             .auto_increment();
///         table.column(User::NAME, |u| &u.name, |u| &mut u.name);
///     }
/// }
/// ```
pub trait Model: Default + Sized + 'static {
    /// The primary key. A tuple for composite keys, in key column order.
    type Key: Into<stmt::Value> + fmt::Debug;

    /// Name of the backing table.
    const TABLE: &'static str;

    /// Declares the model's columns, constraints and indices.
    fn declare(table: &mut TableBuilder<Self>);

    fn id() -> ModelId {
        ModelId::of::<Self>()
    }
}
