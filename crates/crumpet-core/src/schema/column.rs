use super::{FieldId, TableId};
use crate::stmt;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The model field this column stores.
    pub field: FieldId,

    /// The name of the column in the database.
    pub name: String,

    /// The value type stored in the column.
    pub ty: stmt::Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the database assigns the value on insert.
    pub auto_increment: bool,

    /// True if the column carries a single-column unique constraint.
    pub unique: bool,

    /// The field this column references, if it is a foreign key.
    pub references: Option<FieldId>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    /// Declares a column for `field`. The id is assigned at registration.
    pub fn new(field: FieldId, name: impl Into<String>, ty: stmt::Type) -> Column {
        Column {
            id: ColumnId::placeholder(),
            field,
            name: name.into(),
            ty,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            unique: false,
            references: None,
        }
    }

    pub fn storage_kind(&self) -> stmt::Kind {
        self.ty.kind()
    }
}

impl ColumnId {
    pub(crate) fn placeholder() -> ColumnId {
        ColumnId {
            table: TableId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> ColumnId {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
