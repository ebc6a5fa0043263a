use super::{Direction, Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression
    pub expr: Expr,

    /// Ascending or descending. `None` leaves it to the engine default.
    pub order: Option<Direction>,
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            order: Some(Direction::Asc),
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            order: Some(Direction::Desc),
        }
    }
}

impl From<Expr> for OrderByExpr {
    fn from(expr: Expr) -> OrderByExpr {
        OrderByExpr { expr, order: None }
    }
}
