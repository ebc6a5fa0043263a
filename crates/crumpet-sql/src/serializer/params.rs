use super::{Formatter, ToSql};

use crumpet_core::{stmt, Result};

pub trait Params {
    /// Appends a value and returns the placeholder that binds it.
    ///
    /// `ty` is the type of the column the value is compared with or written
    /// to, when one is known.
    fn push(&mut self, param: &stmt::Value, ty: Option<&stmt::Type>) -> Placeholder;
}

/// A 1-based positional placeholder, rendered as `?N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A parameter slot: the value to bind and the type the slot expects.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: stmt::Value,
    pub ty: stmt::Type,
}

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value, _ty: Option<&stmt::Type>) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &stmt::Value, ty: Option<&stmt::Type>) -> Placeholder {
        let ty = match ty {
            Some(ty) => ty.clone(),
            None => value.infer_ty(),
        };

        self.push(TypedValue {
            value: value.clone(),
            ty,
        });
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "?" self.0);
        Ok(())
    }
}
