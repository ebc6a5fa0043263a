use super::{registry::Accessor, Field, ModelInfo};
use crate::{stmt::Primitive, Model};

use crumpet_core::{
    schema::{Column, Table},
    Result,
};

/// Collects the column declarations of one model.
///
/// Passed to [`Model::declare`]. Columns are stored in declaration order,
/// which is also the order records are written and loaded in.
pub struct TableBuilder<M> {
    columns: Vec<(Column, Accessor<M>)>,
    indices: Vec<IndexDecl>,
}

/// Sets constraints on a column just declared with
/// [`TableBuilder::column`].
pub struct ColumnBuilder<'a> {
    column: &'a mut Column,
}

struct IndexDecl {
    name: String,
    fields: Vec<&'static str>,
    unique: bool,
}

impl<M: Model> TableBuilder<M> {
    pub(crate) fn new() -> TableBuilder<M> {
        TableBuilder {
            columns: vec![],
            indices: vec![],
        }
    }

    /// Declares a column for `field`, stored under the field's name.
    ///
    /// `get` and `get_mut` give read and write access to the field on a
    /// record. Columns of `Option` fields are nullable.
    pub fn column<T: Primitive + 'static>(
        &mut self,
        field: Field<M, T>,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> ColumnBuilder<'_> {
        let id = field.id();

        let mut column = Column::new(id, field.name(), T::TYPE);
        column.nullable = T::NULLABLE;

        self.columns.push((column, Accessor::new(id, get, get_mut)));

        let index = self.columns.len() - 1;
        ColumnBuilder {
            column: &mut self.columns[index].0,
        }
    }

    /// Declares a non-unique index over the columns of `fields`.
    pub fn index(&mut self, name: impl Into<String>, fields: &[&'static str]) -> &mut Self {
        self.push_index(name.into(), fields, false)
    }

    /// Declares a unique index over the columns of `fields`.
    pub fn unique_index(&mut self, name: impl Into<String>, fields: &[&'static str]) -> &mut Self {
        self.push_index(name.into(), fields, true)
    }

    fn push_index(&mut self, name: String, fields: &[&'static str], unique: bool) -> &mut Self {
        self.indices.push(IndexDecl {
            name,
            fields: fields.to_vec(),
            unique,
        });
        self
    }

    /// Produces the table declaration and the accessors used to read and
    /// write records.
    pub(crate) fn finish(self) -> Result<(Table, ModelInfo<M>)> {
        let mut table = Table::new(M::id(), M::TABLE);
        let mut accessors = Vec::with_capacity(self.columns.len());

        for (column, accessor) in self.columns {
            table.push_column(column);
            accessors.push(accessor);
        }

        for index in self.indices {
            table.push_index(index.name, &index.fields, index.unique)?;
        }

        Ok((table, ModelInfo::new(accessors)))
    }
}

impl ColumnBuilder<'_> {
    /// Stores the field under a different column name.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.column.name = name.into();
        self
    }

    pub fn primary_key(self) -> Self {
        self.column.primary_key = true;
        self
    }

    /// Lets the database assign the value on insert. Only valid on a lone
    /// integer primary key.
    pub fn auto_increment(self) -> Self {
        self.column.auto_increment = true;
        self
    }

    pub fn unique(self) -> Self {
        self.column.unique = true;
        self
    }

    /// Declares a foreign key to `target`.
    pub fn references<N: Model, U>(self, target: Field<N, U>) -> Self {
        self.column.references = Some(target.id());
        self
    }
}
