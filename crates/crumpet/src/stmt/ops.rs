use super::{Expr, IntoExpr, Numeric};
use crate::{Field, Model};

use crumpet_core::stmt::{self, BinaryOp};
use std::ops;

macro_rules! impl_arith {
    ( $( $trait:ident :: $method:ident => $op:ident ;)* ) => {
        $(
            impl<T: Numeric, R: IntoExpr<T>> ops::$trait<R> for Expr<T> {
                type Output = Expr<T>;

                fn $method(self, rhs: R) -> Expr<T> {
                    Expr::from_untyped(stmt::Expr::binary_op(
                        self.untyped,
                        BinaryOp::$op,
                        rhs.into_expr().untyped,
                    ))
                }
            }

            impl<M: Model, T: Numeric, R: IntoExpr<T>> ops::$trait<R> for Field<M, T> {
                type Output = Expr<T>;

                fn $method(self, rhs: R) -> Expr<T> {
                    ops::$trait::$method(self.into_expr(), rhs)
                }
            }
        )*
    };
}

impl_arith! {
    Add::add => Add;
    Sub::sub => Sub;
    Mul::mul => Mul;
    Div::div => Div;
    Rem::rem => Rem;
}

impl<T: Numeric> ops::Neg for Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::neg(self.untyped))
    }
}

impl<M: Model, T: Numeric> ops::Neg for Field<M, T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        -self.into_expr()
    }
}
