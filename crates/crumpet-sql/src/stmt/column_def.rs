use super::Name;

use crumpet_core::{schema::Column, stmt::Kind};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Name,

    /// Storage class used as the declared column type
    pub ty: Kind,

    pub not_null: bool,

    /// Rendered inline as `PRIMARY KEY AUTOINCREMENT`. SQLite only accepts
    /// this on a lone `INTEGER PRIMARY KEY` column.
    pub auto_increment: bool,

    pub unique: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: Name::from(&column.name),
            ty: column.storage_kind(),
            not_null: !column.nullable,
            auto_increment: column.auto_increment,
            unique: column.unique,
        }
    }
}
