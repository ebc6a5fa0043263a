#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation
    Neg,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}
