use super::{IntoExpr, OrderBy, Select, Text};

use crumpet_core::stmt;
use std::{fmt, marker::PhantomData, ops};

/// A typed expression. `T` is the Rust type the expression evaluates to.
pub struct Expr<T: ?Sized> {
    /// The un-typed expression
    pub(crate) untyped: stmt::Expr,

    /// `T` is the type of the expression
    pub(crate) _p: PhantomData<T>,
}

impl<T: ?Sized> Expr<T> {
    pub(crate) fn from_value(value: stmt::Value) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::Value(value))
    }

    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Expr<T> {
        Expr {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.untyped
    }

    pub fn cast<U: ?Sized>(self) -> Expr<U> {
        Expr::from_untyped(self.untyped)
    }
}

impl<T> Expr<T> {
    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped, rhs.into_expr().untyped))
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped, rhs.into_expr().untyped))
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::gt(self.untyped, rhs.into_expr().untyped))
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ge(self.untyped, rhs.into_expr().untyped))
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::lt(self.untyped, rhs.into_expr().untyped))
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::le(self.untyped, rhs.into_expr().untyped))
    }

    /// `low <= self <= high`
    pub fn between(self, low: impl IntoExpr<T>, high: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::between(
            self.untyped,
            low.into_expr().untyped,
            high.into_expr().untyped,
        ))
    }

    /// Membership in an inline list of values.
    pub fn in_set<I>(self, items: impl IntoIterator<Item = I>) -> Expr<bool>
    where
        I: IntoExpr<T>,
    {
        Expr::from_untyped(stmt::Expr::in_list(self.untyped, list(items)))
    }

    pub fn not_in_set<I>(self, items: impl IntoIterator<Item = I>) -> Expr<bool>
    where
        I: IntoExpr<T>,
    {
        Expr::from_untyped(stmt::Expr::not_in_list(self.untyped, list(items)))
    }

    /// Membership in the single-column result of another query.
    pub fn in_query<F>(self, query: Select<T, F>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::in_subquery(self.untyped, query.untyped))
    }

    pub fn not_in_query<F>(self, query: Select<T, F>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::not_in_subquery(self.untyped, query.untyped))
    }

    pub fn is_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_null(self.untyped))
    }

    pub fn is_not_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_not_null(self.untyped))
    }

    pub fn asc(self) -> OrderBy {
        OrderBy::from_untyped(stmt::OrderByExpr::asc(self.untyped))
    }

    pub fn desc(self) -> OrderBy {
        OrderBy::from_untyped(stmt::OrderByExpr::desc(self.untyped))
    }
}

impl<T: Text> Expr<T> {
    /// SQL `LIKE`. `%` matches any run of characters and `_` a single one.
    pub fn like(self, pattern: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::like(self.untyped, pattern.into_expr().untyped))
    }

    pub fn not_like(self, pattern: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::not_like(
            self.untyped,
            pattern.into_expr().untyped,
        ))
    }

    /// String concatenation, `self || rhs`.
    pub fn concat(self, rhs: impl IntoExpr<String>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::concat(self.untyped, rhs.into_expr().untyped))
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::and(self.untyped, rhs.into_expr().untyped))
    }

    /// Conjunction of every expression; `true` when there are none.
    pub fn and_all<E>(exprs: impl IntoIterator<Item = E>) -> Expr<bool>
    where
        E: IntoExpr<bool>,
    {
        exprs
            .into_iter()
            .map(|expr| expr.into_expr().untyped)
            .reduce(stmt::Expr::and)
            .map(Expr::from_untyped)
            .unwrap_or_else(|| Expr::from_value(stmt::Value::Bool(true)))
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::or(self.untyped, rhs.into_expr().untyped))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Expr<bool> {
        !self
    }
}

impl ops::Not for Expr<bool> {
    type Output = Expr<bool>;

    fn not(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::not(self.untyped))
    }
}

impl<R: IntoExpr<bool>> ops::BitAnd<R> for Expr<bool> {
    type Output = Expr<bool>;

    fn bitand(self, rhs: R) -> Expr<bool> {
        self.and(rhs)
    }
}

impl<R: IntoExpr<bool>> ops::BitOr<R> for Expr<bool> {
    type Output = Expr<bool>;

    fn bitor(self, rhs: R) -> Expr<bool> {
        self.or(rhs)
    }
}

impl<T: ?Sized> Clone for Expr<T> {
    fn clone(&self) -> Expr<T> {
        Expr::from_untyped(self.untyped.clone())
    }
}

impl<T: ?Sized> fmt::Debug for Expr<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.untyped.fmt(fmt)
    }
}

impl<T: ?Sized> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> stmt::Expr {
        value.untyped
    }
}

fn list<T, I: IntoExpr<T>>(items: impl IntoIterator<Item = I>) -> Vec<stmt::Expr> {
    items
        .into_iter()
        .map(|item| item.into_expr().untyped)
        .collect()
}
