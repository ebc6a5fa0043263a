use super::Expr;
use crate::schema::FieldId;

use indexmap::IndexMap;
use std::ops;

/// Column assignments of an `UPDATE`, in the order they were set.
///
/// Setting the same field twice keeps the position of the first assignment
/// and the value of the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<FieldId, Expr>,
}

impl Assignments {
    pub fn new() -> Assignments {
        Assignments::default()
    }

    pub fn set(&mut self, field: FieldId, expr: impl Into<Expr>) {
        self.assignments.insert(field, expr.into());
    }

    pub fn get(&self, field: &FieldId) -> Option<&Expr> {
        self.assignments.get(field)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&FieldId, &Expr)> + '_ {
        self.assignments.iter()
    }
}

impl ops::Deref for Assignments {
    type Target = IndexMap<FieldId, Expr>;

    fn deref(&self) -> &Self::Target {
        &self.assignments
    }
}
