/// SQL functions that can appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Abs,
    Avg,
    Coalesce,
    Count,

    /// `COUNT(*)`, takes no arguments
    CountAll,
    Length,
    Lower,
    Max,
    Min,
    Sum,
    Trim,
    Upper,
}

impl Func {
    pub fn name(self) -> &'static str {
        use Func::*;

        match self {
            Abs => "ABS",
            Avg => "AVG",
            Coalesce => "COALESCE",
            Count | CountAll => "COUNT",
            Length => "LENGTH",
            Lower => "LOWER",
            Max => "MAX",
            Min => "MIN",
            Sum => "SUM",
            Trim => "TRIM",
            Upper => "UPPER",
        }
    }

    pub fn is_aggregate(self) -> bool {
        use Func::*;

        matches!(self, Avg | Count | CountAll | Max | Min | Sum)
    }
}
