use super::Expr;

/// `LIMIT` and `OFFSET` of a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Limit {
    /// Maximum number of rows. `None` means unbounded.
    pub limit: Option<Expr>,

    /// Rows to skip before the first returned row.
    pub offset: Option<Expr>,
}
