use super::{Statement, ValueRecord};
use crate::schema::ModelId;

/// Inserts one or more whole records.
///
/// Each row holds one value per column in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub target: ModelId,

    pub rows: Vec<ValueRecord>,

    /// Render as `REPLACE INTO`, writing every column including the key.
    pub replace: bool,
}

impl Insert {
    pub fn new(target: ModelId, rows: Vec<ValueRecord>) -> Insert {
        Insert {
            target,
            rows,
            replace: false,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Statement {
        Statement::Insert(value)
    }
}
