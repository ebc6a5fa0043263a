use super::{Schema, Table, TableId};
use crate::{stmt::Kind, Error, Result};

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Collects table declarations and validates them into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    tables: IndexMap<super::ModelId, Table>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Registers the table declared for a model.
    ///
    /// Fails when the model is already registered, when two columns share a
    /// name or a field, or when an autoincrement column is not a lone integer
    /// primary key.
    pub fn register(&mut self, mut table: Table) -> Result<TableId> {
        if self.tables.contains_key(&table.model) {
            return Err(Error::configuration(format!(
                "model `{}` is already registered",
                table.model.name()
            )));
        }

        if self.tables.values().any(|other| other.name == table.name) {
            return Err(Error::configuration(format!(
                "table name `{}` is already used by another model",
                table.name
            )));
        }

        verify_table(&table)?;

        let id = TableId(self.tables.len());
        table.set_id(id);
        self.tables.insert(table.model, table);

        Ok(id)
    }

    /// Resolves cross-table references and produces the read-only schema.
    pub fn build(self) -> Result<Schema> {
        let tables: Vec<Table> = self.tables.into_values().collect();

        let by_model: HashMap<_, _> = tables.iter().map(|table| (table.model, table.id)).collect();

        let mut index_names = HashSet::new();

        for table in &tables {
            for index in &table.indices {
                if !index_names.insert(index.name.as_str()) {
                    return Err(Error::configuration(format!(
                        "index name `{}` is used more than once",
                        index.name
                    )));
                }
            }

            for column in &table.columns {
                let Some(target) = column.references else {
                    continue;
                };

                let target_table = by_model
                    .get(&target.model)
                    .map(|id| &tables[id.0])
                    .ok_or_else(|| {
                        Error::configuration(format!(
                            "column `{}.{}` references unregistered model `{}`",
                            table.name,
                            column.name,
                            target.model.name()
                        ))
                    })?;

                let target_column = target_table.column_by_field(target.name).ok_or_else(|| {
                    Error::configuration(format!(
                        "column `{}.{}` references unknown field `{target}`",
                        table.name, column.name
                    ))
                })?;

                if target_column.storage_kind() != column.storage_kind() {
                    return Err(Error::configuration(format!(
                        "column `{}.{}` is {} but references {} column `{}.{}`",
                        table.name,
                        column.name,
                        column.storage_kind().as_str(),
                        target_column.storage_kind().as_str(),
                        target_table.name,
                        target_column.name,
                    )));
                }
            }
        }

        Ok(Schema { tables, by_model })
    }
}

fn verify_table(table: &Table) -> Result<()> {
    if table.columns.is_empty() {
        return Err(Error::configuration(format!(
            "table `{}` declares no columns",
            table.name
        )));
    }

    let mut names = HashSet::new();
    let mut fields = HashSet::new();

    for column in &table.columns {
        if !names.insert(column.name.as_str()) {
            return Err(Error::configuration(format!(
                "table `{}` declares column `{}` more than once",
                table.name, column.name
            )));
        }

        if !fields.insert(column.field.name) {
            return Err(Error::configuration(format!(
                "field `{}` is mapped to more than one column",
                column.field
            )));
        }

        if column.auto_increment {
            if !column.primary_key {
                return Err(Error::configuration(format!(
                    "autoincrement column `{}.{}` must be the primary key",
                    table.name, column.name
                )));
            }

            if column.storage_kind() != Kind::Integer {
                return Err(Error::configuration(format!(
                    "autoincrement column `{}.{}` must be an integer",
                    table.name, column.name
                )));
            }

            if table.primary_key.is_composite() {
                return Err(Error::configuration(format!(
                    "autoincrement column `{}.{}` cannot be part of a composite primary key",
                    table.name, column.name
                )));
            }
        }

        if column.primary_key && column.nullable {
            return Err(Error::configuration(format!(
                "primary key column `{}.{}` cannot be nullable",
                table.name, column.name
            )));
        }
    }

    Ok(())
}
