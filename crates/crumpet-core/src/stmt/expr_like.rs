use super::Expr;

/// `expr [NOT] LIKE pattern`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub negate: bool,
}

impl Expr {
    pub fn like(expr: impl Into<Expr>, pattern: impl Into<Expr>) -> Expr {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            negate: false,
        }
        .into()
    }

    pub fn not_like(expr: impl Into<Expr>, pattern: impl Into<Expr>) -> Expr {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            negate: true,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Expr {
        Expr::Like(value)
    }
}
