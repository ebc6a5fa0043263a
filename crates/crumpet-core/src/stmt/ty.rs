use super::Value;

/// The type of a column or expression, from Crumpet's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value, stored as an integer
    Bool,

    /// Raw bytes
    Bytes,

    /// 64-bit float
    F64,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// A list of a single type
    List(Box<Type>),

    /// The null type can be cast to any type.
    Null,

    /// A fixed-length tuple where each item can have a different type.
    Record(Vec<Type>),

    /// String type
    String,

    /// UUID, stored as its hyphenated text form
    Uuid,
}

/// The storage class a value occupies in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Real,
    Text,
    Blob,
    Null,

    /// Lists and records. These never reach the engine as a single value.
    Composite,
}

impl Type {
    pub fn list(ty: impl Into<Type>) -> Type {
        Type::List(Box::new(ty.into()))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Type::Bool | Type::I32 | Type::I64 => Kind::Integer,
            Type::F64 => Kind::Real,
            Type::String | Type::Uuid => Kind::Text,
            Type::Bytes => Kind::Blob,
            Type::Null => Kind::Null,
            Type::List(_) | Type::Record(_) => Kind::Composite,
        }
    }

    /// Returns `true` if `value` may be bound where this type is expected.
    ///
    /// The check is at storage-class granularity. Null is accepted anywhere,
    /// and integers are accepted by real slots. Lists and records never bind
    /// to a single slot.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.kind(), value.kind()) {
            (_, Kind::Composite) => false,
            (_, Kind::Null) | (Kind::Null, _) => true,
            (Kind::Real, Kind::Integer) => true,
            (expected, actual) => expected == actual,
        }
    }
}

impl Kind {
    /// The SQLite storage class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Integer => "INTEGER",
            Kind::Real => "REAL",
            Kind::Text => "TEXT",
            Kind::Blob => "BLOB",
            Kind::Null => "NULL",
            Kind::Composite => "RECORD",
        }
    }
}

impl From<&Type> for Type {
    fn from(value: &Type) -> Type {
        value.clone()
    }
}
