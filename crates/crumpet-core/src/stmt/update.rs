use super::{Assignments, Expr, Statement, ValueRecord};
use crate::schema::ModelId;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: ModelId,

    pub set: UpdateSet,

    /// Which rows to update. For [`UpdateSet::Record`] this narrows the
    /// key match further.
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateSet {
    /// Explicit column assignments
    Assignments(Assignments),

    /// A whole record: every non-key column is set and the row is selected
    /// by the key columns.
    Record(ValueRecord),
}

impl Update {
    pub fn add_filter(&mut self, filter: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Statement {
        Statement::Update(value)
    }
}
