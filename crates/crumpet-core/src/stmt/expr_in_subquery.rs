use super::*;

/// `expr [NOT] IN (SELECT ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub query: Box<Select>,
    pub negate: bool,
}

impl Expr {
    pub fn in_subquery(lhs: impl Into<Expr>, query: Select) -> Expr {
        ExprInSubquery {
            expr: Box::new(lhs.into()),
            query: Box::new(query),
            negate: false,
        }
        .into()
    }

    pub fn not_in_subquery(lhs: impl Into<Expr>, query: Select) -> Expr {
        ExprInSubquery {
            expr: Box::new(lhs.into()),
            query: Box::new(query),
            negate: true,
        }
        .into()
    }
}

impl From<ExprInSubquery> for Expr {
    fn from(value: ExprInSubquery) -> Expr {
        Expr::InSubquery(value)
    }
}
