use crate::{stmt::Primitive, Model, Registry};

use crumpet_core::{err, stmt, Result};

/// A type a result row can be loaded into.
///
/// Records of a model load from one value per column in registration order.
/// Primitives load from a single column and tuples of primitives load
/// positionally.
pub trait Load: Sized {
    fn load(row: Vec<stmt::Value>, registry: &Registry) -> Result<Self>;
}

impl<M: Model> Load for M {
    fn load(row: Vec<stmt::Value>, registry: &Registry) -> Result<M> {
        registry.model::<M>()?.load(row)
    }
}

fn scalar(mut row: Vec<stmt::Value>) -> Result<stmt::Value> {
    match row.len() {
        1 => Ok(row.remove(0)),
        width => Err(err!("expected a row with 1 column, got {width}")),
    }
}

macro_rules! impl_load_for_primitive {
    ( $( $t:ty ),* ) => {
        $(
            impl Load for $t {
                fn load(row: Vec<stmt::Value>, _registry: &Registry) -> Result<$t> {
                    <$t as Primitive>::load(scalar(row)?)
                }
            }
        )*
    };
}

impl_load_for_primitive!(bool, i32, i64, f64, String, Vec<u8>, uuid::Uuid);

impl<T: Primitive> Load for Option<T> {
    fn load(row: Vec<stmt::Value>, _registry: &Registry) -> Result<Option<T>> {
        <Option<T> as Primitive>::load(scalar(row)?)
    }
}

macro_rules! impl_load_for_tuple {
    ( $len:literal; $( $t:ident: $v:ident ),* ) => {
        impl<$( $t: Primitive ),*> Load for ( $( $t, )* ) {
            fn load(row: Vec<stmt::Value>, _registry: &Registry) -> Result<Self> {
                let [ $( $v ),* ] = <[stmt::Value; $len]>::try_from(row).map_err(|row| {
                    err!("expected a row with {} columns, got {}", $len, row.len())
                })?;

                Ok(( $( <$t as Primitive>::load($v)?, )* ))
            }
        }
    };
}

impl_load_for_tuple!(2; T0: v0, T1: v1);
impl_load_for_tuple!(3; T0: v0, T1: v1, T2: v2);
impl_load_for_tuple!(4; T0: v0, T1: v1, T2: v2, T3: v3);
impl_load_for_tuple!(5; T0: v0, T1: v1, T2: v2, T3: v3, T4: v4);
impl_load_for_tuple!(6; T0: v0, T1: v1, T2: v2, T3: v3, T4: v4, T5: v5);
