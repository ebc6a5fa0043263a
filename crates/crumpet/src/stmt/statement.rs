use crate::{PreparedStatement, Registry};

use crumpet_core::{stmt, Result};

/// A typed statement that can be compiled and executed.
///
/// `Output` is what executing the statement produces: the rows of a query,
/// the row id of an insert or the number of rows changed by an update or
/// delete.
pub trait Statement: Sized {
    type Output;

    /// Lowers the statement to the untyped tree, resolving model records to
    /// column values through `registry`.
    fn into_untyped(self, registry: &Registry) -> Result<stmt::Statement>;

    /// Describes the rows the statement expects, used when a lookup that
    /// must find a row finds none.
    fn describe(&self) -> Option<String> {
        None
    }

    /// Runs a statement prepared from `Self` with its current bindings.
    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<Self::Output>;
}
