use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    /// String concatenation, `||`
    Concat,
}

impl BinaryOp {
    pub fn is_eq(self) -> bool {
        matches!(self, BinaryOp::Eq)
    }

    pub fn is_comparison(self) -> bool {
        use BinaryOp::*;

        matches!(self, Eq | Ne | Ge | Gt | Le | Lt)
    }

    /// The SQL operator token.
    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            Concat => "||",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
