use super::{Expr, Statement};
use crate::schema::ModelId;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Model to delete rows from
    pub from: ModelId,

    /// Which rows to delete. `None` deletes every row.
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn add_filter(&mut self, filter: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Statement {
        Statement::Delete(value)
    }
}
