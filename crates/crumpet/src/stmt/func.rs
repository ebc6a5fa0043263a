//! SQL functions over typed expressions.
//!
//! Aggregates (`count`, `max`, `min`, `sum`, `avg`) are used in projections
//! and `HAVING` clauses; the rest are scalar.

use super::{Expr, IntoExpr, Numeric, Primitive, Text};

use crumpet_core::stmt::{self, Func};

fn call<T>(func: Func, args: Vec<stmt::Expr>) -> Expr<T> {
    Expr::from_untyped(stmt::Expr::func(func, args))
}

/// Number of characters in a string.
pub fn length<T: Text>(expr: impl IntoExpr<T>) -> Expr<i64> {
    call(Func::Length, vec![expr.into_expr().untyped])
}

pub fn lower<T: Text>(expr: impl IntoExpr<T>) -> Expr<T> {
    call(Func::Lower, vec![expr.into_expr().untyped])
}

pub fn upper<T: Text>(expr: impl IntoExpr<T>) -> Expr<T> {
    call(Func::Upper, vec![expr.into_expr().untyped])
}

/// Strips leading and trailing spaces.
pub fn trim<T: Text>(expr: impl IntoExpr<T>) -> Expr<T> {
    call(Func::Trim, vec![expr.into_expr().untyped])
}

pub fn abs<T: Numeric>(expr: impl IntoExpr<T>) -> Expr<T> {
    call(Func::Abs, vec![expr.into_expr().untyped])
}

/// `expr` when it is not null, `fallback` otherwise.
pub fn coalesce<T: Primitive>(
    expr: impl IntoExpr<Option<T>>,
    fallback: impl IntoExpr<T>,
) -> Expr<T> {
    call(
        Func::Coalesce,
        vec![expr.into_expr().untyped, fallback.into_expr().untyped],
    )
}

/// Number of rows where `expr` is not null.
pub fn count<T>(expr: impl IntoExpr<T>) -> Expr<i64> {
    call(Func::Count, vec![expr.into_expr().untyped])
}

/// `COUNT(*)`
pub fn count_all() -> Expr<i64> {
    Expr::from_untyped(stmt::Expr::count_all())
}

/// Largest value, null over an empty set.
pub fn max<T: Primitive>(expr: impl IntoExpr<T>) -> Expr<Option<T>> {
    call(Func::Max, vec![expr.into_expr().untyped])
}

/// Smallest value, null over an empty set.
pub fn min<T: Primitive>(expr: impl IntoExpr<T>) -> Expr<Option<T>> {
    call(Func::Min, vec![expr.into_expr().untyped])
}

pub fn sum<T: Numeric>(expr: impl IntoExpr<T>) -> Expr<Option<T>> {
    call(Func::Sum, vec![expr.into_expr().untyped])
}

pub fn avg<T: Numeric>(expr: impl IntoExpr<T>) -> Expr<Option<f64>> {
    call(Func::Avg, vec![expr.into_expr().untyped])
}
