use super::{
    column::ColumnRef,
    expr::{Hinted, KeyFilter},
    value::Literal,
    Comma, Formatter, Ident, Params, ToSql,
};

use crate::stmt::{self, Visit};
use crumpet_core::{
    schema::{Column, ModelId, Table},
    Error, Result,
};

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            stmt::Statement::CreateIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let name = &self.name;

        fmt!(f, "CREATE TABLE " if_not_exists name " (" Comma(&self.columns));

        if !self.primary_key.is_empty() {
            fmt!(f, ", PRIMARY KEY (" Comma(&self.primary_key) ")");
        }

        for fk in &self.foreign_keys {
            let (column, table, target) = (&fk.column, &fk.table, &fk.target);
            fmt!(f, ", FOREIGN KEY (" column ") REFERENCES " table " (" target ")");
        }

        fmt!(f, ")");
        Ok(())
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let (name, on) = (&self.name, &self.on);
        let columns = Comma(&self.columns);

        fmt!(
            f, "CREATE " unique "INDEX " if_not_exists name " ON " on " (" columns ")"
        );
        Ok(())
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;

        fmt!(f, "DROP TABLE " if_exists name);
        Ok(())
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let from = from_tables(f, self)?;

        let mut scope = from.clone();
        for join in &self.source.joins {
            scope.push(f.serializer.table(join.model)?);
        }

        if from.is_empty() && !scope.is_empty() {
            return Err(Error::query_builder("a join requires a table in FROM"));
        }

        f.push_scope(scope);

        let distinct = if self.distinct { "DISTINCT " } else { "" };
        let returning = &self.returning;

        fmt!(f, "SELECT " distinct returning);

        if !from.is_empty() {
            let tables = Comma(from.iter().map(|table| Ident(&table.name)));
            fmt!(f, " FROM " tables);
        }

        for join in &self.source.joins {
            let table = f.serializer.table(join.model)?;
            let on = &join.on;

            fmt!(f, " " join.op.as_str() " " Ident(&table.name) " ON " on);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.group_by.is_empty() {
            fmt!(f, " GROUP BY " Comma(&self.group_by));
        }

        if let Some(having) = &self.having {
            fmt!(f, " HAVING " having);
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = &self.limit {
            match &limit.limit {
                Some(expr) => fmt!(f, " LIMIT " expr),
                None => fmt!(f, " LIMIT -1"),
            }

            if let Some(offset) = &limit.offset {
                fmt!(f, " OFFSET " offset);
            }
        }

        f.pop_scope();
        Ok(())
    }
}

impl ToSql for &stmt::Returning {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            stmt::Returning::Model(model) => {
                let table = f.serializer.table(*model)?;
                fmt!(f, Comma(table.columns.iter().map(|column| ColumnRef(&column.field))));
            }
            stmt::Returning::Exprs(exprs) => {
                if exprs.is_empty() {
                    return Err(Error::query_builder("query selects no columns"));
                }
                fmt!(f, Comma(exprs));
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, &self.expr);

        if let Some(order) = self.order {
            fmt!(f, " " order.as_str());
        }

        Ok(())
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = f.serializer.table(self.target)?;

        if self.rows.is_empty() {
            return Err(Error::query_builder(format!(
                "insert into `{}` has no rows",
                table.name
            )));
        }

        for row in &self.rows {
            check_width(table, row)?;
        }

        let written: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| self.replace || !column.auto_increment)
            .map(|(i, _)| i)
            .collect();

        let keyword = if self.replace { "REPLACE INTO " } else { "INSERT INTO " };
        fmt!(f, keyword Ident(&table.name));

        if written.is_empty() {
            if self.rows.len() > 1 {
                return Err(Error::query_builder(format!(
                    "`{}` has no columns to write; insert rows one at a time",
                    table.name
                )));
            }

            fmt!(f, " DEFAULT VALUES");
            return Ok(());
        }

        let columns = Comma(written.iter().map(|&i| Ident(&table.columns[i].name)));
        let rows = Comma(self.rows.iter().map(|row| RowValues {
            table,
            written: &written,
            row,
        }));

        fmt!(f, " (" columns ") VALUES " rows);
        Ok(())
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = f.serializer.table(self.target)?;
        f.push_scope(vec![table]);

        fmt!(f, "UPDATE " Ident(&table.name) " SET ");

        match &self.set {
            stmt::UpdateSet::Assignments(assignments) => {
                if assignments.is_empty() {
                    return Err(Error::query_builder(format!(
                        "update of `{}` has no assignments",
                        table.name
                    )));
                }

                let mut set = Vec::with_capacity(assignments.len());
                for (field, expr) in assignments.iter() {
                    if field.model != self.target {
                        return Err(Error::query_builder(format!(
                            "cannot assign `{field}` in an update of `{}`",
                            self.target.name()
                        )));
                    }

                    set.push(Assign {
                        column: f.serializer.column(field)?,
                        expr,
                    });
                }

                fmt!(f, Comma(set));

                if let Some(filter) = &self.filter {
                    fmt!(f, " WHERE " filter);
                }
            }
            stmt::UpdateSet::Record(record) => {
                check_width(table, record)?;

                if table.primary_key.columns.is_empty() {
                    return Err(Error::query_builder(format!(
                        "`{}` has no primary key; records cannot be updated by key",
                        table.name
                    )));
                }

                let set: Vec<_> = table
                    .columns
                    .iter()
                    .zip(record.iter())
                    .filter(|(column, _)| !column.primary_key)
                    .map(|(column, value)| Assign {
                        column,
                        expr: value,
                    })
                    .collect();

                if set.is_empty() {
                    return Err(Error::query_builder(format!(
                        "`{}` has no non-key columns to update",
                        table.name
                    )));
                }

                let mut key: Vec<stmt::Value> = table
                    .primary_key
                    .columns
                    .iter()
                    .map(|column_id| record[column_id.index].clone())
                    .collect();
                let key = if key.len() == 1 {
                    key.remove(0)
                } else {
                    stmt::Value::record_from_vec(key)
                };

                fmt!(f, Comma(set) " WHERE " KeyFilter(self.target, &key));

                if let Some(filter) = &self.filter {
                    fmt!(f, " AND " filter);
                }
            }
        }

        f.pop_scope();
        Ok(())
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = f.serializer.table(self.from)?;
        f.push_scope(vec![table]);

        fmt!(f, "DELETE FROM " Ident(&table.name));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        f.pop_scope();
        Ok(())
    }
}

/// `"column" = value` inside a `SET` list.
struct Assign<'a, E> {
    column: &'a Column,
    expr: E,
}

impl ToSql for Assign<'_, &stmt::Expr> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, Ident(&self.column.name) " = " Hinted(self.expr, Some(&self.column.ty)));
        Ok(())
    }
}

impl ToSql for Assign<'_, &stmt::Value> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, Ident(&self.column.name) " = " Literal(self.expr, Some(&self.column.ty)));
        Ok(())
    }
}

/// One parenthesized `VALUES` tuple, restricted to the written columns.
struct RowValues<'a> {
    table: &'a Table,
    written: &'a [usize],
    row: &'a stmt::ValueRecord,
}

impl ToSql for RowValues<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let values = Comma(
            self.written
                .iter()
                .map(|&i| Literal(&self.row[i], Some(&self.table.columns[i].ty))),
        );

        fmt!(f, "(" values ")");
        Ok(())
    }
}

fn check_width(table: &Table, record: &stmt::ValueRecord) -> Result<()> {
    if record.len() != table.columns.len() {
        return Err(Error::query_builder(format!(
            "record for `{}` has {} values but the table has {} columns",
            table.name,
            record.len(),
            table.columns.len()
        )));
    }

    Ok(())
}

/// Tables listed in `FROM`, in first-seen order.
///
/// The explicit models and the models the query projects are always local.
/// Any other model the query references is local unless it is joined or
/// visible from an enclosing query, in which case the reference is
/// correlated.
fn from_tables<'a, P>(f: &Formatter<'a, P>, select: &stmt::Select) -> Result<Vec<&'a Table>> {
    #[derive(Default)]
    struct Referenced(Vec<ModelId>);

    impl Referenced {
        fn add(&mut self, model: ModelId) {
            if !self.0.contains(&model) {
                self.0.push(model);
            }
        }
    }

    impl Visit for Referenced {
        fn visit_expr_column(&mut self, i: &stmt::ExprColumn) {
            self.add(i.field.model);
        }

        fn visit_expr_key(&mut self, i: &stmt::ExprKey) {
            self.add(i.model);
        }

        fn visit_expr_in_subquery(&mut self, i: &stmt::ExprInSubquery) {
            // The subquery resolves its own tables.
            self.visit_expr(&i.expr);
        }
    }

    let mut projected = Referenced::default();
    projected.visit_returning(&select.returning);
    if let stmt::Returning::Model(model) = &select.returning {
        projected.add(*model);
    }

    let mut referenced = Referenced(select.source.from.clone());
    for model in &projected.0 {
        referenced.add(*model);
    }
    referenced.visit_select(select);

    let mut tables = vec![];

    for model in referenced.0 {
        let explicit = select.source.from.contains(&model);
        let joined = select.source.joins.iter().any(|join| join.model == model);
        let local = projected.0.contains(&model) || !f.in_any_scope(model);

        if explicit || (!joined && local) {
            tables.push(f.serializer.table(model)?);
        }
    }

    Ok(tables)
}
