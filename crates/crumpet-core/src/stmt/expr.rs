use super::*;

/// A node in the untyped expression tree.
///
/// Trees are built once by the typed layer and only read afterwards: the
/// compiler walks them without modification.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// `expr BETWEEN low AND high`
    Between(ExprBetween),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column through a model field
    Column(ExprColumn),

    /// Function call
    Func(ExprFunc),

    /// In list
    InList(ExprInList),

    /// The expression is contained by the given subquery
    InSubquery(ExprInSubquery),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Matches a model's primary key against a key value
    Key(ExprKey),

    /// Pattern match with `LIKE`
    Like(ExprLike),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),

    /// Unary operator
    UnaryOp(ExprUnaryOp),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Expr {
        Expr::Value(Value::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expr::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Expr::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Value(Value::Bool(true)))
    }
}

impl Default for Expr {
    fn default() -> Expr {
        Expr::Value(Value::default())
    }
}

impl<T> From<T> for Expr
where
    Value: From<T>,
{
    fn from(value: T) -> Expr {
        Expr::Value(value.into())
    }
}
