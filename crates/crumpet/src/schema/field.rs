use crate::{
    stmt::{Expr, IntoExpr, OrderBy, Select, Text},
    Model,
};

use crumpet_core::schema::FieldId;
use std::{fmt, marker::PhantomData};

/// A typed handle on one field of a model.
///
/// Handles are usually declared as associated constants on the model and
/// used to build expressions: `User::NAME.eq("Ann")`.
pub struct Field<M, T> {
    name: &'static str,
    _p: PhantomData<fn() -> (M, T)>,
}

impl<M, T> Field<M, T> {
    pub const fn new(name: &'static str) -> Field<M, T> {
        Field {
            name,
            _p: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<M: Model, T> Field<M, T> {
    pub fn id(&self) -> FieldId {
        M::id().field(self.name)
    }
}

impl<M, T> Clone for Field<M, T> {
    fn clone(&self) -> Field<M, T> {
        *self
    }
}

impl<M, T> Copy for Field<M, T> {}

impl<M: Model, T> fmt::Debug for Field<M, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Field({})", self.id())
    }
}

/// Expression builders, forwarded to the column expression.
impl<M: Model, T> Field<M, T> {
    /// The column reference expression.
    pub fn expr(self) -> Expr<T> {
        self.into_expr()
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().eq(rhs)
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().ne(rhs)
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().gt(rhs)
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().ge(rhs)
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().lt(rhs)
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().le(rhs)
    }

    pub fn between(self, low: impl IntoExpr<T>, high: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().between(low, high)
    }

    pub fn in_set<I: IntoExpr<T>>(self, items: impl IntoIterator<Item = I>) -> Expr<bool> {
        self.expr().in_set(items)
    }

    pub fn not_in_set<I: IntoExpr<T>>(self, items: impl IntoIterator<Item = I>) -> Expr<bool> {
        self.expr().not_in_set(items)
    }

    pub fn in_query<F>(self, query: Select<T, F>) -> Expr<bool> {
        self.expr().in_query(query)
    }

    pub fn not_in_query<F>(self, query: Select<T, F>) -> Expr<bool> {
        self.expr().not_in_query(query)
    }

    pub fn is_null(self) -> Expr<bool> {
        self.expr().is_null()
    }

    pub fn is_not_null(self) -> Expr<bool> {
        self.expr().is_not_null()
    }

    pub fn asc(self) -> OrderBy {
        self.expr().asc()
    }

    pub fn desc(self) -> OrderBy {
        self.expr().desc()
    }
}

impl<M: Model, T: Text> Field<M, T> {
    pub fn like(self, pattern: impl IntoExpr<String>) -> Expr<bool> {
        self.expr().like(pattern)
    }

    pub fn not_like(self, pattern: impl IntoExpr<String>) -> Expr<bool> {
        self.expr().not_like(pattern)
    }

    pub fn concat(self, rhs: impl IntoExpr<String>) -> Expr<T> {
        self.expr().concat(rhs)
    }
}
