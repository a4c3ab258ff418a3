use serde::Serialize;
use tokenizers::Tokenizer;

use super::model::NerModel;
use crate::error::Result;

/// A tagged span with an entity category code and confidence score.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// The text span the tag applies to.
    pub word: String,
    /// Entity category code, e.g. `B-PERSON` or `I-LOC`.
    pub label: String,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
    /// Byte offset of the span start in the source text.
    pub start: usize,
    /// Byte offset of the span end in the source text.
    pub end: usize,
}

/// Seam used by the request orchestrator; lets tests substitute a mock
/// recognizer for the model-backed pipeline.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;

    /// Identity of the model actually serving requests (primary or fallback).
    fn model_id(&self) -> &str;
}

/// Tags named entities in text.
///
/// Construct with [`NerPipelineBuilder`](super::NerPipelineBuilder).
pub struct NerPipeline<M: NerModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) model_id: String,
}

impl<M: NerModel> NerPipeline<M> {
    /// Tag `text`, returning every annotation in model order.
    pub fn run(&self, text: &str) -> Result<Vec<Entity>> {
        self.model.predict(&self.tokenizer, text)
    }

    /// Identity of the loaded model, for display labels.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M: NerModel> EntityRecognizer for NerPipeline<M> {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        self.run(text)
    }

    fn model_id(&self) -> &str {
        self.model_id()
    }
}
