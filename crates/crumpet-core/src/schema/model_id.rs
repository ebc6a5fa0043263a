use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

/// Identifies a model by its Rust type.
#[derive(Clone, Copy)]
pub struct ModelId {
    type_id: TypeId,
    name: &'static str,
}

/// Identifies a field of a model by its Rust field name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub name: &'static str,
}

impl ModelId {
    pub fn of<T: 'static>() -> ModelId {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);

        ModelId {
            type_id: TypeId::of::<T>(),
            name: base.rsplit("::").next().unwrap_or(base),
        }
    }

    /// The unqualified type name, used in error messages.
    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn field(self, name: &'static str) -> FieldId {
        FieldId { model: self, name }
    }
}

impl PartialEq for ModelId {
    fn eq(&self, other: &ModelId) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelId {}

impl Hash for ModelId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.name)
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}.{})", self.model.name, self.name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}.{}", self.model.name, self.name)
    }
}
