use super::{Formatter, Ident, Params, ToSql};

use crumpet_core::{schema::FieldId, Result};

/// A column reference, qualified with its table name when more than one
/// table is in scope or when it belongs to an enclosing query.
pub(super) struct ColumnRef<'a>(pub(super) &'a FieldId);

impl ToSql for ColumnRef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.0;
        let column = f.serializer.column(field)?;

        let scope = f.current_scope();
        let qualify = if scope.iter().any(|table| table.model == field.model) {
            scope.len() > 1
        } else if f.in_any_scope(field.model) {
            true
        } else {
            return Err(f.not_in_scope(field));
        };

        if qualify {
            let table = f.serializer.table(field.model)?;
            fmt!(f, Ident(&table.name) "." Ident(&column.name));
        } else {
            fmt!(f, Ident(&column.name));
        }

        Ok(())
    }
}
