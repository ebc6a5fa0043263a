use super::{Expr, Func};

/// A function call expression.
///
/// # Examples
///
/// ```text
/// count(*)          // counts all rows
/// length(name)      // length of a string column
/// coalesce(a, b)    // first non-null argument
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub func: Func,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func(func: Func, args: Vec<Expr>) -> Expr {
        ExprFunc { func, args }.into()
    }

    pub fn count_all() -> Expr {
        Expr::func(Func::CountAll, vec![])
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Expr {
        Expr::Func(value)
    }
}
