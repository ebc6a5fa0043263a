use crumpet_core::{stmt, Error, Result};

/// A Rust type stored in a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    /// Decodes a value read from the database.
    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

/// Primitives supporting arithmetic and numeric aggregates.
pub trait Numeric: Primitive {}

/// Primitives supporting `LIKE`, concatenation and the string functions.
pub trait Text: Primitive {}

impl Primitive for bool {
    const TYPE: stmt::Type = stmt::Type::Bool;

    fn load(value: stmt::Value) -> Result<bool> {
        match value {
            stmt::Value::Bool(v) => Ok(v),
            stmt::Value::I64(0) => Ok(false),
            stmt::Value::I64(1) => Ok(true),
            value => Err(Error::type_mismatch(value, "bool")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bool(*self)
    }
}

impl Primitive for i32 {
    const TYPE: stmt::Type = stmt::Type::I32;

    fn load(value: stmt::Value) -> Result<i32> {
        match value {
            stmt::Value::I32(v) => Ok(v),
            stmt::Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_mismatch(v, "i32"))
            }
            value => Err(Error::type_mismatch(value, "i32")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::I32(*self)
    }
}

impl Primitive for i64 {
    const TYPE: stmt::Type = stmt::Type::I64;

    fn load(value: stmt::Value) -> Result<i64> {
        match value {
            stmt::Value::I64(v) => Ok(v),
            stmt::Value::I32(v) => Ok(v.into()),
            value => Err(Error::type_mismatch(value, "i64")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::I64(*self)
    }
}

const MAX_EXACT_F64: u64 = 1 << 53;

impl Primitive for f64 {
    const TYPE: stmt::Type = stmt::Type::F64;

    fn load(value: stmt::Value) -> Result<f64> {
        match value {
            stmt::Value::F64(v) => Ok(v),
            // Aggregates over REAL columns holding whole numbers come back as
            // integers. Only magnitudes up to 2^53 convert exactly.
            stmt::Value::I64(v) if v.unsigned_abs() <= MAX_EXACT_F64 => Ok(v as f64),
            stmt::Value::I64(v) => Err(Error::type_mismatch(v, "f64")),
            value => Err(Error::type_mismatch(value, "f64")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::F64(*self)
    }
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn load(value: stmt::Value) -> Result<String> {
        match value {
            stmt::Value::String(v) => Ok(v),
            value => Err(Error::type_mismatch(value, "String")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn load(value: stmt::Value) -> Result<Vec<u8>> {
        match value {
            stmt::Value::Bytes(v) => Ok(v),
            value => Err(Error::type_mismatch(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }
}

impl Primitive for uuid::Uuid {
    const TYPE: stmt::Type = stmt::Type::Uuid;

    fn load(value: stmt::Value) -> Result<uuid::Uuid> {
        match value {
            stmt::Value::Uuid(v) => Ok(v),
            stmt::Value::String(v) => v
                .parse()
                .map_err(|_| Error::type_mismatch(stmt::Value::String(v), "Uuid")),
            value => Err(Error::type_mismatch(value, "Uuid")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Uuid(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Option<T>> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}

impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for f64 {}
impl<T: Numeric> Numeric for Option<T> {}

impl Text for String {}
impl<T: Text> Text for Option<T> {}
