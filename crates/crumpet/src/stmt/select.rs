use super::{Fetch, IntoExpr, One, Optional, OrderBy, Projection, Rows, Statement};
use crate::{Load, Model, PreparedStatement, Registry};

use crumpet_core::{
    stmt::{self, Join, JoinOp},
    Result,
};
use std::{fmt, marker::PhantomData};

/// A typed `SELECT`.
///
/// `R` is the type each row loads as and `F` decides how rows are collected
/// when the query runs. Clauses may be added in any order.
pub struct Select<R, F = Rows> {
    pub(crate) untyped: stmt::Select,

    /// Reported when a lookup that must find a row finds none.
    pub(crate) context: Option<String>,

    _p: PhantomData<fn() -> (R, F)>,
}

/// Loads every row of `M`.
pub fn get_all<M: Model>() -> Select<M> {
    Select::from_untyped(stmt::Select::new(M::id(), M::id()))
}

/// Loads the record of `M` with primary key `key`. Executing the query
/// fails with a record-not-found error when there is none.
pub fn get<M: Model>(key: M::Key) -> Select<M, One> {
    let context = format!("table={} key={:?}", M::TABLE, key);

    let mut untyped = stmt::Select::new(M::id(), M::id());
    untyped.add_filter(stmt::Expr::key(M::id(), key));

    Select {
        untyped,
        context: Some(context),
        _p: PhantomData,
    }
}

/// Like [`get`], but a missing record loads as `None`.
pub fn get_optional<M: Model>(key: M::Key) -> Select<M, Optional> {
    get::<M>(key).fetch()
}

/// `SELECT COUNT(*)` over the table of `M`.
pub fn count<M: Model>() -> Select<i64, One> {
    Select::from_untyped(stmt::Select::new(vec![stmt::Expr::count_all()], M::id()))
}

/// Selects one expression or a tuple of expressions.
///
/// Tables are taken from the columns referenced unless named explicitly
/// with [`Select::from`].
pub fn select<P: Projection>(projection: P) -> Select<P::Output> {
    let mut exprs = vec![];
    projection.exprs(&mut exprs);

    Select::from_untyped(stmt::Select::new(exprs, stmt::Source::default()))
}

impl<R, F> Select<R, F> {
    pub fn from_untyped(untyped: stmt::Select) -> Select<R, F> {
        Select {
            untyped,
            context: None,
            _p: PhantomData,
        }
    }

    pub fn into_untyped(self) -> stmt::Select {
        self.untyped
    }

    /// Adds a `WHERE` condition, combined with any existing one using `AND`.
    pub fn filter(mut self, expr: impl IntoExpr<bool>) -> Self {
        self.untyped.add_filter(expr.into_expr().untyped);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.untyped.order_by.push(order_by.into().untyped);
        self
    }

    pub fn group_by<T>(mut self, expr: impl IntoExpr<T>) -> Self {
        self.untyped.group_by.push(expr.into_expr().untyped);
        self
    }

    /// Adds a `HAVING` condition, combined with any existing one using `AND`.
    pub fn having(mut self, expr: impl IntoExpr<bool>) -> Self {
        self.untyped.add_having(expr.into_expr().untyped);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.untyped.limit().limit = Some(stmt::Value::I64(limit).into());
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.untyped.limit().offset = Some(stmt::Value::I64(offset).into());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.untyped.distinct = true;
        self
    }

    /// Names the table of `M` in the `FROM` clause.
    pub fn from<M: Model>(mut self) -> Self {
        if !self.untyped.source.contains(M::id()) {
            self.untyped.source.from.push(M::id());
        }
        self
    }

    pub fn inner_join<M: Model>(self, on: impl IntoExpr<bool>) -> Self {
        self.join::<M>(JoinOp::Inner, on)
    }

    pub fn left_join<M: Model>(self, on: impl IntoExpr<bool>) -> Self {
        self.join::<M>(JoinOp::Left, on)
    }

    fn join<M: Model>(mut self, op: JoinOp, on: impl IntoExpr<bool>) -> Self {
        self.untyped.source.joins.push(Join {
            model: M::id(),
            op,
            on: on.into_expr().untyped,
        });
        self
    }

    /// Collects the rows with `G` instead.
    pub fn fetch<G>(self) -> Select<R, G> {
        Select {
            untyped: self.untyped,
            context: self.context,
            _p: PhantomData,
        }
    }

    /// Expects exactly one row. Zero rows or more than one is an error.
    pub fn one(self) -> Select<R, One> {
        self.fetch()
    }

    /// Takes the first row, if any.
    pub fn first(self) -> Select<R, Optional> {
        self.limit(1).fetch()
    }

    /// Collects every row.
    pub fn all(self) -> Select<R, Rows> {
        self.fetch()
    }
}

impl<R: Load, F: Fetch<R>> Statement for Select<R, F> {
    type Output = F::Output;

    fn into_untyped(self, _registry: &Registry) -> Result<stmt::Statement> {
        Ok(self.untyped.into())
    }

    fn describe(&self) -> Option<String> {
        self.context.clone()
    }

    fn exec(stmt: &mut PreparedStatement<'_, Self>) -> Result<F::Output> {
        let context = stmt.context().map(str::to_owned);
        F::fetch(stmt.cursor::<R>(), context.as_deref())
    }
}

impl<R, F> Clone for Select<R, F> {
    fn clone(&self) -> Select<R, F> {
        Select {
            untyped: self.untyped.clone(),
            context: self.context.clone(),
            _p: PhantomData,
        }
    }
}

impl<R, F> fmt::Debug for Select<R, F> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.untyped.fmt(fmt)
    }
}
