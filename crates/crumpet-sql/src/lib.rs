pub mod serializer;
pub use serializer::{CompiledQuery, Params, Placeholder, Serializer, TypedValue};

pub mod stmt;
pub use stmt::Statement;

use crumpet_core::{schema::Schema, Result};

/// Compiles a statement into SQL text and its ordered parameter slots.
///
/// Compiling the same statement against the same schema always yields the
/// same text and slot order.
pub fn compile(schema: &Schema, stmt: impl Into<Statement>) -> Result<CompiledQuery> {
    Serializer::new(schema).compile(&stmt.into())
}
