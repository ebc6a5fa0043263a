use crumpet_core::{stmt, Error, Result};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// A Crumpet value borrowed for binding to a SQLite parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a stmt::Value);

impl Value<'_> {
    /// Reads a raw column value using its storage class.
    ///
    /// Conversion into the caller's Rust type happens later, when the row is
    /// materialized.
    pub(crate) fn load(value: ValueRef<'_>) -> Result<stmt::Value> {
        Ok(match value {
            ValueRef::Null => stmt::Value::Null,
            ValueRef::Integer(value) => stmt::Value::I64(value),
            ValueRef::Real(value) => stmt::Value::F64(value),
            ValueRef::Text(value) => {
                let value = std::str::from_utf8(value).map_err(Error::engine)?;
                stmt::Value::String(value.to_owned())
            }
            ValueRef::Blob(value) => stmt::Value::Bytes(value.to_vec()),
        })
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match self.0 {
            Value::Bool(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::List(_) | Value::Record(_) => Err(rusqlite::Error::ToSqlConversionFailure(
                format!("{} value cannot be bound to a single parameter", self.0.kind().as_str())
                    .into(),
            )),
        }
    }
}
