use super::Expr;

/// `expr BETWEEN low AND high`, bounds inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBetween {
    pub expr: Box<Expr>,
    pub low: Box<Expr>,
    pub high: Box<Expr>,
}

impl Expr {
    pub fn between(expr: impl Into<Expr>, low: impl Into<Expr>, high: impl Into<Expr>) -> Expr {
        ExprBetween {
            expr: Box::new(expr.into()),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
        }
        .into()
    }
}

impl From<ExprBetween> for Expr {
    fn from(value: ExprBetween) -> Expr {
        Expr::Between(value)
    }
}
