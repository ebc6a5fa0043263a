use crate::{stmt::Primitive, Model, Statement};

use crumpet_core::{
    err,
    schema::{Column, FieldId, ModelId, Schema, Table},
    stmt, Error, Result,
};
use crumpet_sql::CompiledQuery;
use std::{any::Any, collections::HashMap, fmt};

/// The registered models: the validated schema plus, for each model, the
/// field accessors used to write and load records.
///
/// Read-only once built, so one registry can be shared between threads and
/// attached to any number of connections.
pub struct Registry {
    schema: Schema,
    models: HashMap<ModelId, Box<dyn Any + Send + Sync>>,
}

/// Field accessors of one model, in column order.
pub(crate) struct ModelInfo<M> {
    accessors: Vec<Accessor<M>>,
}

pub(crate) struct Accessor<M> {
    field: FieldId,
    read: Box<dyn Fn(&M) -> stmt::Value + Send + Sync>,
    write: Box<dyn Fn(&mut M, stmt::Value) -> Result<()> + Send + Sync>,
}

impl Registry {
    pub(crate) fn new(
        schema: Schema,
        models: HashMap<ModelId, Box<dyn Any + Send + Sync>>,
    ) -> Registry {
        Registry { schema, models }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn table<M: Model>(&self) -> Result<&Table> {
        self.schema.table(M::id())
    }

    /// Columns of `M` in registration order.
    pub fn columns_of<M: Model>(&self) -> Result<&[Column]> {
        self.schema.columns_of(M::id())
    }

    pub fn column<M: Model, T>(&self, field: crate::Field<M, T>) -> Result<&Column> {
        self.schema.column(&field.id())
    }

    /// Compiles a statement to SQL text and its ordered parameter slots
    /// without touching a connection.
    pub fn compile<S: Statement>(&self, stmt: S) -> Result<CompiledQuery> {
        let untyped = stmt.into_untyped(self)?;
        crumpet_sql::compile(&self.schema, untyped)
    }

    pub(crate) fn model<M: Model>(&self) -> Result<&ModelInfo<M>> {
        self.models
            .get(&M::id())
            .and_then(|info| info.downcast_ref::<ModelInfo<M>>())
            .ok_or_else(|| Error::unknown_model(M::id().name()))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Registry")
            .field("schema", &self.schema)
            .finish()
    }
}

impl<M: Model> ModelInfo<M> {
    pub(crate) fn new(accessors: Vec<Accessor<M>>) -> ModelInfo<M> {
        ModelInfo { accessors }
    }

    /// Reads every field of `record`, in column order.
    pub(crate) fn record(&self, record: &M) -> stmt::ValueRecord {
        self.accessors
            .iter()
            .map(|accessor| (accessor.read)(record))
            .collect()
    }

    /// Builds a record from a row holding one value per column.
    pub(crate) fn load(&self, row: Vec<stmt::Value>) -> Result<M> {
        if row.len() != self.accessors.len() {
            return Err(err!(
                "row has {} columns but `{}` has {} fields",
                row.len(),
                M::id().name(),
                self.accessors.len()
            ));
        }

        let mut record = M::default();

        for (accessor, value) in self.accessors.iter().zip(row) {
            (accessor.write)(&mut record, value)
                .map_err(|err| err.context(format!("failed to load `{}`", accessor.field)))?;
        }

        Ok(record)
    }
}

impl<M: 'static> Accessor<M> {
    pub(crate) fn new<T: Primitive + 'static>(
        field: FieldId,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> Accessor<M> {
        Accessor {
            field,
            read: Box::new(move |record: &M| get(record).to_value()),
            write: Box::new(move |record: &mut M, value: stmt::Value| {
                *get_mut(record) = T::load(value)?;
                Ok(())
            }),
        }
    }
}
