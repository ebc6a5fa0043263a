#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder, TypedValue};

// Fragment serializers
mod column_def;
mod expr;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use crumpet_core::{
    schema::{Column, FieldId, ModelId, Schema, Table},
    Error, Result,
};

/// SQL text together with the values for its placeholders.
///
/// `params[i]` binds placeholder `?{i + 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<TypedValue>,
}

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Tables in scope, one entry per query nesting level. The last entry is
    /// the innermost query.
    scopes: Vec<Vec<&'a Table>>,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    /// Renders `stmt`, appending its literal values to `params` in
    /// placeholder order.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            scopes: vec![],
        };

        stmt.to_sql(&mut fmt)?;

        Ok(ret)
    }

    pub fn compile(&self, stmt: &Statement) -> Result<CompiledQuery> {
        let mut params = Vec::<TypedValue>::new();
        let sql = self.serialize(stmt, &mut params)?;

        tracing::trace!(sql = %sql, params = params.len(), "compiled statement");

        Ok(CompiledQuery { sql, params })
    }

    fn table(&self, model: ModelId) -> Result<&'a Table> {
        self.schema.table(model)
    }

    fn column(&self, field: &FieldId) -> Result<&'a Column> {
        self.schema.column(field)
    }
}

impl<'a, T> Formatter<'a, T> {
    fn push_scope(&mut self, tables: Vec<&'a Table>) {
        self.scopes.push(tables);
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn current_scope(&self) -> &[&'a Table] {
        self.scopes.last().map(|scope| &scope[..]).unwrap_or(&[])
    }

    /// Returns true if `model` is visible from any enclosing query.
    fn in_any_scope(&self, model: ModelId) -> bool {
        self.scopes
            .iter()
            .any(|scope| scope.iter().any(|table| table.model == model))
    }

    fn not_in_scope(&self, field: &FieldId) -> Error {
        Error::query_builder(format!("column `{field}` is not in scope"))
    }
}
