use super::Expr;
use crate::{Field, Model};

use crumpet_core::stmt::{self, Value};

/// Conversion into an expression of type `T`.
///
/// Implemented for expressions, field handles and literals. Literals also
/// convert into wider types: an `i32` compares against an `i64` column and
/// any value against a nullable column of its type.
pub trait IntoExpr<T: ?Sized> {
    fn into_expr(self) -> Expr<T>;
}

impl<T: ?Sized> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self
    }
}

impl<T: ?Sized> IntoExpr<T> for &Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self.clone()
    }
}

impl<M: Model, T> IntoExpr<T> for Field<M, T> {
    fn into_expr(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::column(self.id()))
    }
}

macro_rules! impl_into_expr_for_literal {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoExpr<$t> for $t {
                fn into_expr(self) -> Expr<$t> {
                    Expr::from_value(Value::from(self))
                }
            }

            impl IntoExpr<$t> for &$t {
                fn into_expr(self) -> Expr<$t> {
                    Expr::from_value(Value::from(self.clone()))
                }
            }

            impl IntoExpr<Option<$t>> for $t {
                fn into_expr(self) -> Expr<Option<$t>> {
                    Expr::from_value(Value::from(self))
                }
            }

            impl IntoExpr<Option<$t>> for Option<$t> {
                fn into_expr(self) -> Expr<Option<$t>> {
                    Expr::from_value(Value::from(self))
                }
            }
        )*
    };
}

impl_into_expr_for_literal!(bool, i32, i64, f64, String, Vec<u8>, uuid::Uuid);

macro_rules! impl_into_expr_widening {
    ( $( $from:ty => $to:ty : $conv:expr ;)* ) => {
        $(
            impl IntoExpr<$to> for $from {
                fn into_expr(self) -> Expr<$to> {
                    Expr::from_value(Value::from($conv(self)))
                }
            }

            impl IntoExpr<Option<$to>> for $from {
                fn into_expr(self) -> Expr<Option<$to>> {
                    Expr::from_value(Value::from($conv(self)))
                }
            }
        )*
    };
}

impl_into_expr_widening! {
    i32 => i64 : i64::from;
    i32 => f64 : f64::from;
    &str => String : String::from;
    &[u8] => Vec<u8> : <[u8]>::to_vec;
}

impl IntoExpr<f64> for i64 {
    fn into_expr(self) -> Expr<f64> {
        Expr::from_value(Value::F64(self as f64))
    }
}
