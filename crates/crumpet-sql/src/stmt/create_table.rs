use super::{ColumnDef, Name, Statement};

use crumpet_core::{
    schema::{Schema, Table},
    Result,
};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Trailing primary key clause. Empty when the key is declared inline on
    /// an autoincrement column.
    pub primary_key: Vec<Name>,

    pub foreign_keys: Vec<ForeignKey>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

/// `FOREIGN KEY (column) REFERENCES table (target)`
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: Name,
    pub table: Name,
    pub target: Name,
}

impl Statement {
    /// Builds the `CREATE TABLE IF NOT EXISTS` statement for a registered
    /// table.
    pub fn create_table(schema: &Schema, table: &Table) -> Result<Statement> {
        let inline_pk = table.auto_increment_column().is_some();

        let mut foreign_keys = vec![];

        for column in &table.columns {
            if let Some(target) = &column.references {
                let target_table = schema.table(target.model)?;
                let target_column = schema.column(target)?;

                foreign_keys.push(ForeignKey {
                    column: Name::from(&column.name),
                    table: Name::from(&target_table.name),
                    target: Name::from(&target_column.name),
                });
            }
        }

        Ok(CreateTable {
            name: Name::from(&table.name),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            primary_key: if inline_pk {
                vec![]
            } else {
                table
                    .primary_key_columns()
                    .map(|column| Name::from(&column.name))
                    .collect()
            },
            foreign_keys,
            if_not_exists: true,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Statement {
        Statement::CreateTable(value)
    }
}
