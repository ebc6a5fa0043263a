//! `UPDATE` of one record or of every row matching a filter.

use super::{IntoExpr, Statement};
use crate::{Field, Model, PreparedStatement, Registry};

use crumpet_core::{
    stmt::{self, Assignments, UpdateSet},
    Result,
};
use std::marker::PhantomData;

/// Writes every non-key field of a record to the row with the same key.
/// Executing it returns the number of rows changed.
pub struct Update<'a, M> {
    record: &'a M,
}

/// Assigns columns on every row matching the filter, or on every row
/// without one. Executing it returns the number of rows changed.
pub struct UpdateAll<M> {
    assignments: Assignments,
    filter: Option<stmt::Expr>,
    _p: PhantomData<fn() -> M>,
}

pub fn update<M: Model>(record: &M) -> Update<'_, M> {
    Update { record }
}

pub fn update_all<M: Model>() -> UpdateAll<M> {
    UpdateAll {
        assignments: Assignments::new(),
        filter: None,
        _p: PhantomData,
    }
}

impl<M: Model> UpdateAll<M> {
    /// Assigns `value` to `field`. Setting a field again replaces the
    /// earlier value.
    pub fn set<T>(mut self, field: Field<M, T>, value: impl IntoExpr<T>) -> Self {
        self.assignments.set(field.id(), value.into_expr().untyped);
        self
    }

    /// Narrows the rows to update, combined with any existing filter using
    /// `AND`.
    pub fn filter(mut self, expr: impl IntoExpr<bool>) -> Self {
        let expr = expr.into_expr().untyped;
        self.filter = Some(match self.filter.take() {
            Some(existing) => stmt::Expr::and(existing, expr),
            None => expr,
        });
        self
    }
}

impl<M: Model> Statement for Update<'_, M> {
    type Output = usize;

    fn into_untyped(self, registry: &Registry) -> Result<stmt::Statement> {
        let record = registry.model::<M>()?.record(self.record);

        Ok(stmt::Update {
            target: M::id(),
            set: UpdateSet::Record(record),
            filter: None,
        }
        .into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<usize> {
        stmt.run()
    }
}

impl<M: Model> Statement for UpdateAll<M> {
    type Output = usize;

    fn into_untyped(self, _registry: &Registry) -> Result<stmt::Statement> {
        Ok(stmt::Update {
            target: M::id(),
            set: UpdateSet::Assignments(self.assignments),
            filter: self.filter,
        }
        .into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<usize> {
        stmt.run()
    }
}
