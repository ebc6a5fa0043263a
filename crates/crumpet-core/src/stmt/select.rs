use super::{Expr, Limit, OrderByExpr, Returning, Source, Statement};

/// A `SELECT` query.
///
/// Clauses may be filled in any order; they are always rendered in SQL
/// grammar order.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of a SQL query.
    pub returning: Returning,

    /// `SELECT DISTINCT`
    pub distinct: bool,

    /// The `FROM` part of a SQL query.
    pub source: Source,

    /// Query filter
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    /// Filter applied after grouping
    pub having: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<Limit>,
}

impl Select {
    pub fn new(returning: impl Into<Returning>, source: impl Into<Source>) -> Select {
        Select {
            returning: returning.into(),
            distinct: false,
            source: source.into(),
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
        }
    }

    /// ANDs `filter` onto the existing filter.
    pub fn add_filter(&mut self, filter: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
    }

    /// ANDs `filter` onto the existing `HAVING` clause.
    pub fn add_having(&mut self, filter: impl Into<Expr>) {
        self.having = Some(match self.having.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
    }

    pub fn limit(&mut self) -> &mut Limit {
        self.limit.get_or_insert_with(Limit::default)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Statement {
        Statement::Query(value)
    }
}
