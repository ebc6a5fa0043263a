mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::{CreateTable, ForeignKey};

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

pub use crumpet_core::stmt::*;

/// Any statement the serializer can render: model-level queries and DML, or
/// schema DDL.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropTable(DropTable),
    Delete(Delete),
    Insert(Insert),
    Query(Select),
    Update(Update),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }

    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            Statement::CreateIndex(_) | Statement::CreateTable(_) | Statement::DropTable(_)
        )
    }
}

impl From<crumpet_core::stmt::Statement> for Statement {
    fn from(value: crumpet_core::stmt::Statement) -> Statement {
        match value {
            crumpet_core::stmt::Statement::Delete(stmt) => Statement::Delete(stmt),
            crumpet_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            crumpet_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
            crumpet_core::stmt::Statement::Update(stmt) => Statement::Update(stmt),
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Statement {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Statement {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Statement {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Statement {
        Statement::Delete(value)
    }
}
