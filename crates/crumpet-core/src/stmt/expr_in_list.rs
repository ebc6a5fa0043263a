use super::*;

/// `expr [NOT] IN (item, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
    pub negate: bool,
}

impl Expr {
    pub fn in_list(lhs: impl Into<Expr>, list: Vec<Expr>) -> Expr {
        ExprInList {
            expr: Box::new(lhs.into()),
            list,
            negate: false,
        }
        .into()
    }

    pub fn not_in_list(lhs: impl Into<Expr>, list: Vec<Expr>) -> Expr {
        ExprInList {
            expr: Box::new(lhs.into()),
            list,
            negate: true,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Expr {
        Expr::InList(value)
    }
}
