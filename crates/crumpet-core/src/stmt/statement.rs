use super::{Delete, Insert, Select, Update};

/// A statement the compiler can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }
}
