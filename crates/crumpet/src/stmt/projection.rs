use super::{Expr, IntoExpr, Primitive};
use crate::{Field, Model};

use crumpet_core::stmt;

/// Expressions selected by [`select`](super::select). A single expression
/// loads as a scalar and a tuple loads positionally.
pub trait Projection {
    /// The Rust type of one result row.
    type Output;

    fn exprs(self, out: &mut Vec<stmt::Expr>);
}

impl<T: Primitive> Projection for Expr<T> {
    type Output = T;

    fn exprs(self, out: &mut Vec<stmt::Expr>) {
        out.push(self.untyped);
    }
}

impl<M: Model, T: Primitive> Projection for Field<M, T> {
    type Output = T;

    fn exprs(self, out: &mut Vec<stmt::Expr>) {
        out.push(self.into_expr().untyped);
    }
}

macro_rules! impl_projection_for_tuple {
    ( $( $n:tt: $t:ident ),* ) => {
        impl<$( $t ),*> Projection for ( $( $t, )* )
        where
            $( $t: Projection, $t::Output: Primitive, )*
        {
            type Output = ( $( $t::Output, )* );

            fn exprs(self, out: &mut Vec<stmt::Expr>) {
                $( self.$n.exprs(out); )*
            }
        }
    };
}

impl_projection_for_tuple!(0: P0, 1: P1);
impl_projection_for_tuple!(0: P0, 1: P1, 2: P2);
impl_projection_for_tuple!(0: P0, 1: P1, 2: P2, 3: P3);
impl_projection_for_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4);
impl_projection_for_tuple!(0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5);
