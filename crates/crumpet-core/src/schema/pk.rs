use super::ColumnId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key, in declaration order.
    pub columns: Vec<ColumnId>,
}

impl PrimaryKey {
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}
