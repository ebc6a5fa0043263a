use super::{Expr, UnaryOp};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnaryOp {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn neg(expr: impl Into<Expr>) -> Expr {
        ExprUnaryOp {
            op: UnaryOp::Neg,
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprUnaryOp> for Expr {
    fn from(value: ExprUnaryOp) -> Expr {
        Expr::UnaryOp(value)
    }
}
