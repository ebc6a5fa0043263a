use super::Expr;
use crate::schema::ModelId;

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The model whose table is joined
    pub model: ModelId,

    pub op: JoinOp,

    /// The join constraint
    pub on: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOp {
    Inner,
    Left,
}

impl JoinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinOp::Inner => "INNER JOIN",
            JoinOp::Left => "LEFT JOIN",
        }
    }
}
