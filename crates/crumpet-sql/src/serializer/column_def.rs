use super::{Params, ToSql};

use crate::stmt;
use crumpet_core::Result;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, &self.name " " self.ty);

        if self.auto_increment {
            fmt!(f, " PRIMARY KEY AUTOINCREMENT");
        }

        if self.not_null && !self.auto_increment {
            fmt!(f, " NOT NULL");
        }

        if self.unique {
            fmt!(f, " UNIQUE");
        }

        Ok(())
    }
}
