mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, ColumnId};

mod index;
pub use index::{Index, IndexId};

mod model_id;
pub use model_id::{FieldId, ModelId};

mod pk;
pub use pk::PrimaryKey;

mod table;
pub use table::{Table, TableId};

use crate::{Error, Result};
use std::collections::HashMap;

/// The registry of every model type mapped to a table.
///
/// A `Schema` is produced once by [`Builder::build`] and is read-only from
/// then on, so it can be shared between threads behind an `Arc`.
#[derive(Debug)]
pub struct Schema {
    /// Tables in registration order. `TableId(i)` indexes this list.
    pub tables: Vec<Table>,

    by_model: HashMap<ModelId, TableId>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the table registered for `model`.
    pub fn table(&self, model: ModelId) -> Result<&Table> {
        self.by_model
            .get(&model)
            .map(|id| &self.tables[id.0])
            .ok_or_else(|| Error::unknown_model(model.name()))
    }

    pub fn table_by_id(&self, id: TableId) -> &Table {
        &self.tables[id.0]
    }

    /// Returns the column a model field is mapped to.
    pub fn column(&self, field: &FieldId) -> Result<&Column> {
        self.table(field.model)?
            .column_by_field(field.name)
            .ok_or_else(|| Error::unknown_field(field.model.name(), field.name))
    }

    /// Returns the ordered columns of a model's table.
    pub fn columns_of(&self, model: ModelId) -> Result<&[Column]> {
        Ok(&self.table(model)?.columns)
    }

    pub fn contains(&self, model: ModelId) -> bool {
        self.by_model.contains_key(&model)
    }
}
