pub mod bert;

pub use bert::{BertFillMaskModel, BertNerModel};

use crate::pipelines::cache::ModelOptions;

/// A Hugging Face Hub repository identity, e.g. `asafaya/bert-base-arabic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelId(pub String);

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        ModelId(value.to_string())
    }
}

impl From<String> for ModelId {
    fn from(value: String) -> Self {
        ModelId(value)
    }
}

impl From<&String> for ModelId {
    fn from(value: &String) -> Self {
        ModelId(value.clone())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ModelOptions for ModelId {
    fn cache_key(&self) -> String {
        self.0.clone()
    }
}
