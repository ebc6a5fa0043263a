use super::Join;
use crate::schema::ModelId;

/// The `FROM` part of a query.
///
/// `from` lists the models named explicitly. Models referenced by columns
/// but not listed here are added to the scope by the compiler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
    pub from: Vec<ModelId>,
    pub joins: Vec<Join>,
}

impl Source {
    pub fn model(model: ModelId) -> Source {
        Source {
            from: vec![model],
            joins: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.joins.is_empty()
    }

    pub fn contains(&self, model: ModelId) -> bool {
        self.from.contains(&model) || self.joins.iter().any(|join| join.model == model)
    }
}

impl From<ModelId> for Source {
    fn from(value: ModelId) -> Source {
        Source::model(value)
    }
}
