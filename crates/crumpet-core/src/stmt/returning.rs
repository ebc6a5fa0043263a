use super::Expr;
use crate::schema::ModelId;

/// The projection of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Every column of the model, in registration order
    Model(ModelId),

    /// A list of expressions, decoded positionally
    Exprs(Vec<Expr>),
}

impl Returning {
    pub fn is_model(&self) -> bool {
        matches!(self, Returning::Model(_))
    }
}

impl From<ModelId> for Returning {
    fn from(value: ModelId) -> Returning {
        Returning::Model(value)
    }
}

impl From<Vec<Expr>> for Returning {
    fn from(value: Vec<Expr>) -> Returning {
        Returning::Exprs(value)
    }
}
