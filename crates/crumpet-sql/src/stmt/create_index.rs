use super::{Name, Statement};

use crumpet_core::schema::{Index, Table};

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The columns to index
    pub columns: Vec<Name>,

    /// When true, the index is unique
    pub unique: bool,

    pub if_not_exists: bool,
}

impl Statement {
    pub fn create_index(table: &Table, index: &Index) -> Statement {
        CreateIndex {
            name: Name::from(&index.name),
            on: Name::from(&table.name),
            columns: index
                .columns
                .iter()
                .map(|column_id| Name::from(&table.column(*column_id).name))
                .collect(),
            unique: index.unique,
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Statement {
        Statement::CreateIndex(value)
    }
}
