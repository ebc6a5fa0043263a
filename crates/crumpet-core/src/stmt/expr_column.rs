use super::Expr;
use crate::schema::FieldId;

/// References the column a model field is mapped to.
///
/// Only the field identity is stored; the column name is resolved when the
/// statement is compiled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprColumn {
    pub field: FieldId,
}

impl Expr {
    pub fn column(field: FieldId) -> Expr {
        ExprColumn { field }.into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Expr::Column(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Expr {
        Expr::Column(value)
    }
}

impl From<FieldId> for ExprColumn {
    fn from(field: FieldId) -> ExprColumn {
        ExprColumn { field }
    }
}
