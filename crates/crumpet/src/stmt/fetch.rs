use crate::{Cursor, Load};

use crumpet_core::{Error, Result};

/// How a query's rows are collected when it is executed.
pub trait Fetch<R> {
    type Output;

    fn fetch(cursor: Cursor<'_, R>, context: Option<&str>) -> Result<Self::Output>;
}

/// Collect every row.
#[derive(Debug)]
pub struct Rows;

/// Exactly one row. None is a record-not-found error and more than one is a
/// too-many-records error.
#[derive(Debug)]
pub struct One;

/// At most one row.
#[derive(Debug)]
pub struct Optional;

impl<R: Load> Fetch<R> for Rows {
    type Output = Vec<R>;

    fn fetch(cursor: Cursor<'_, R>, _context: Option<&str>) -> Result<Vec<R>> {
        cursor.collect()
    }
}

impl<R: Load> Fetch<R> for One {
    type Output = R;

    fn fetch(mut cursor: Cursor<'_, R>, context: Option<&str>) -> Result<R> {
        let row = match cursor.next() {
            Some(row) => row?,
            None => return Err(Error::record_not_found(context.unwrap_or_default())),
        };

        if cursor.next().is_some() {
            return Err(Error::too_many_records(context.unwrap_or_default()));
        }

        Ok(row)
    }
}

impl<R: Load> Fetch<R> for Optional {
    type Output = Option<R>;

    fn fetch(mut cursor: Cursor<'_, R>, _context: Option<&str>) -> Result<Option<R>> {
        cursor.next().transpose()
    }
}
