use super::{Kind, Type, ValueRecord};

/// A literal value, either bound into a statement or read from a row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// 64-bit float
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// A fixed-width tuple of values
    Record(ValueRecord),

    /// String value
    String(String),

    /// UUID value
    Uuid(uuid::Uuid),
}

impl Value {
    pub const fn null() -> Value {
        Value::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    pub fn record_from_vec(fields: Vec<Value>) -> Value {
        ValueRecord::from_vec(fields).into()
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) | Value::I32(_) | Value::I64(_) => Kind::Integer,
            Value::F64(_) => Kind::Real,
            Value::String(_) | Value::Uuid(_) => Kind::Text,
            Value::Bytes(_) => Kind::Blob,
            Value::Null => Kind::Null,
            Value::List(_) | Value::Record(_) => Kind::Composite,
        }
    }

    /// Infers the type of the value.
    pub fn infer_ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Bytes(_) => Type::Bytes,
            Value::F64(_) => Type::F64,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::List(items) => match items.first() {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Null),
            },
            Value::Null => Type::Null,
            Value::Record(record) => Type::Record(record.iter().map(Value::infer_ty).collect()),
            Value::String(_) => Type::String,
            Value::Uuid(_) => Type::Uuid,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v),
            Value::Bool(v) => Some(v.into()),
            _ => None,
        }
    }

    /// Number of scalar components. Records count each field; anything
    /// else counts as one.
    pub fn width(&self) -> usize {
        match self {
            Value::Record(record) => record.len(),
            _ => 1,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::F64(value)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Value {
        Value::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Value {
        Value::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Value {
        Value::Bytes(src.to_vec())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Value {
        Value::Uuid(src)
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Value {
        Value::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Value {
        Value::List(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Value {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

macro_rules! impl_from_tuple {
    ( $( $n:tt: $t:ident ),* ) => {
        impl<$( $t ),*> From<( $( $t, )* )> for Value
        where
            $( Value: From<$t>, )*
        {
            fn from(src: ( $( $t, )* )) -> Value {
                Value::record_from_vec(vec![ $( Value::from(src.$n), )* ])
            }
        }
    };
}

impl_from_tuple!(0: T0, 1: T1);
impl_from_tuple!(0: T0, 1: T1, 2: T2);
impl_from_tuple!(0: T0, 1: T1, 2: T2, 3: T3);
