use super::{Column, ColumnId, Index, IndexId, ModelId, PrimaryKey};
use crate::{Error, Result};

use std::fmt;

/// A database table backing one model type.
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// The model stored in this table
    pub model: ModelId,

    /// Name of the table
    pub name: String,

    /// The table's columns, in registration order
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,

    pub indices: Vec<Index>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    /// Starts the declaration of a table. The id is assigned at registration.
    pub fn new(model: ModelId, name: impl Into<String>) -> Table {
        Table {
            id: TableId::placeholder(),
            model,
            name: name.into(),
            columns: vec![],
            primary_key: PrimaryKey::default(),
            indices: vec![],
        }
    }

    /// Appends a column declaration.
    pub fn push_column(&mut self, mut column: Column) {
        column.id = ColumnId {
            table: self.id,
            index: self.columns.len(),
        };

        if column.primary_key {
            self.primary_key.columns.push(column.id);
        }

        self.columns.push(column);
    }

    /// Declares an index over the columns mapped from `fields`.
    pub fn push_index(
        &mut self,
        name: impl Into<String>,
        fields: &[&'static str],
        unique: bool,
    ) -> Result<()> {
        let name = name.into();
        let mut columns = Vec::with_capacity(fields.len());

        for field in fields {
            let column = self.column_by_field(field).ok_or_else(|| {
                Error::configuration(format!(
                    "index `{name}` references unknown field `{}.{field}`",
                    self.model.name()
                ))
            })?;
            columns.push(column.id);
        }

        if columns.is_empty() {
            return Err(Error::configuration(format!(
                "index `{name}` has no columns"
            )));
        }

        self.indices.push(Index {
            id: IndexId {
                table: self.id,
                index: self.indices.len(),
            },
            name,
            on: self.id,
            columns,
            unique,
        });

        Ok(())
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_field(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field.name == field)
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key
            .columns
            .iter()
            .map(|column_id| &self.columns[column_id.index])
    }

    /// The column whose value is assigned by the database on insert.
    pub fn auto_increment_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.auto_increment)
    }

    pub(super) fn set_id(&mut self, id: TableId) {
        self.id = id;

        for column in &mut self.columns {
            column.id.table = id;
        }

        for column_id in &mut self.primary_key.columns {
            column_id.table = id;
        }

        for index in &mut self.indices {
            index.id.table = id;
            index.on = id;

            for column_id in &mut index.columns {
                column_id.table = id;
            }
        }
    }
}

impl TableId {
    pub(crate) fn placeholder() -> TableId {
        TableId(usize::MAX)
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
