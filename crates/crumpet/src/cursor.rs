use crate::{Load, Registry};

use crumpet_core::Result;
use crumpet_driver_sqlite::Rows;
use std::{iter::FusedIterator, marker::PhantomData};

/// Rows of one query execution, loaded lazily as `R`.
///
/// Each step reads the next row from the engine. A row that fails to load
/// yields an error without ending the sequence; an engine error ends it.
pub struct Cursor<'s, R> {
    rows: Rows<'s>,
    registry: &'s Registry,
    done: bool,
    _p: PhantomData<fn() -> R>,
}

impl<'s, R> Cursor<'s, R> {
    pub(crate) fn new(rows: Rows<'s>, registry: &'s Registry) -> Cursor<'s, R> {
        Cursor {
            rows,
            registry,
            done: false,
            _p: PhantomData,
        }
    }

    /// Number of columns in each row.
    pub fn width(&self) -> usize {
        self.rows.width()
    }
}

impl<R: Load> Iterator for Cursor<'_, R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Result<R>> {
        if self.done {
            return None;
        }

        match self.rows.next() {
            Ok(Some(row)) => Some(R::load(row, self.registry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Load> FusedIterator for Cursor<'_, R> {}
