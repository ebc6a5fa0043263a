use super::{Expr, Value};
use crate::schema::ModelId;

/// Matches the primary key of `model` against `value`.
///
/// For a composite key `value` is a record with one field per key column.
/// The compiler expands this into one equality per key column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprKey {
    pub model: ModelId,
    pub value: Value,
}

impl Expr {
    pub fn key(model: ModelId, value: impl Into<Value>) -> Expr {
        ExprKey {
            model,
            value: value.into(),
        }
        .into()
    }
}

impl From<ExprKey> for Expr {
    fn from(value: ExprKey) -> Expr {
        Expr::Key(value)
    }
}
