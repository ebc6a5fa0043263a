use super::{Expr, IntoExpr};
use crate::{Field, Model};

use crumpet_core::stmt;

/// One `ORDER BY` term.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub(crate) untyped: stmt::OrderByExpr,
}

impl OrderBy {
    pub(crate) fn from_untyped(untyped: stmt::OrderByExpr) -> OrderBy {
        OrderBy { untyped }
    }
}

/// Orders by the expression with the engine's default direction.
impl<T> From<Expr<T>> for OrderBy {
    fn from(value: Expr<T>) -> OrderBy {
        OrderBy::from_untyped(stmt::OrderByExpr::from(value.untyped))
    }
}

impl<M: Model, T> From<Field<M, T>> for OrderBy {
    fn from(value: Field<M, T>) -> OrderBy {
        OrderBy::from(value.into_expr())
    }
}
