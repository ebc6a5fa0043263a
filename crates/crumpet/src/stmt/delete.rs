//! `DELETE` by key or by filter.

use super::{IntoExpr, Statement};
use crate::{Model, PreparedStatement, Registry};

use crumpet_core::{stmt, Result};
use std::marker::PhantomData;

/// Deletes the row of `M` with the given key. Executing it returns the
/// number of rows removed, zero or one.
pub struct Remove<M> {
    key: stmt::Value,
    _p: PhantomData<fn() -> M>,
}

/// Deletes every row of `M` matching the filter, or every row without one.
pub struct RemoveAll<M> {
    filter: Option<stmt::Expr>,
    _p: PhantomData<fn() -> M>,
}

pub fn remove<M: Model>(key: M::Key) -> Remove<M> {
    Remove {
        key: key.into(),
        _p: PhantomData,
    }
}

pub fn remove_all<M: Model>() -> RemoveAll<M> {
    RemoveAll {
        filter: None,
        _p: PhantomData,
    }
}

impl<M: Model> RemoveAll<M> {
    pub fn filter(mut self, expr: impl IntoExpr<bool>) -> Self {
        let expr = expr.into_expr().untyped;
        self.filter = Some(match self.filter.take() {
            Some(existing) => stmt::Expr::and(existing, expr),
            None => expr,
        });
        self
    }
}

impl<M: Model> Statement for Remove<M> {
    type Output = usize;

    fn into_untyped(self, _registry: &Registry) -> Result<stmt::Statement> {
        Ok(stmt::Delete {
            from: M::id(),
            filter: Some(stmt::Expr::key(M::id(), self.key)),
        }
        .into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<usize> {
        stmt.run()
    }
}

impl<M: Model> Statement for RemoveAll<M> {
    type Output = usize;

    fn into_untyped(self, _registry: &Registry) -> Result<stmt::Statement> {
        Ok(stmt::Delete {
            from: M::id(),
            filter: self.filter,
        }
        .into())
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<usize> {
        stmt.run()
    }
}
