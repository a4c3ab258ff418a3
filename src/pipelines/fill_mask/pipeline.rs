use serde::Serialize;
use tokenizers::Tokenizer;

use super::model::FillMaskModel;
use crate::error::Result;

/// A candidate completion: the full sentence with the mask filled in.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    /// The input text with the placeholder replaced by the predicted token.
    pub sequence: String,
    /// The predicted token on its own.
    pub token: String,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
}

/// Seam used by the request orchestrator; lets tests substitute a mock
/// completer for the model-backed pipeline.
pub trait MaskCompleter {
    /// Rank candidate completions for the single placeholder in `text`.
    /// Callers are responsible for validating the placeholder count first.
    fn complete(&self, text: &str) -> Result<Vec<Completion>>;

    /// Placeholder spelling the underlying model expects, e.g. `[MASK]`.
    fn mask_token(&self) -> &str;
}

/// Predicts candidate words for a mask placeholder in text.
///
/// Construct with [`FillMaskPipelineBuilder`](super::FillMaskPipelineBuilder).
pub struct FillMaskPipeline<M: FillMaskModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) model_id: String,
    pub(crate) mask_token: String,
    pub(crate) top_k: usize,
}

impl<M: FillMaskModel> FillMaskPipeline<M> {
    /// Return ranked candidates for the placeholder in `text`.
    ///
    /// Order is the model's ranking; no re-sorting or filtering is applied.
    pub fn run(&self, text: &str) -> Result<Vec<Completion>> {
        self.model
            .predict_top_k(&self.tokenizer, text, &self.mask_token, self.top_k)
    }

    /// Return up to `k` ranked candidates, overriding the builder's default.
    pub fn run_top_k(&self, text: &str, k: usize) -> Result<Vec<Completion>> {
        self.model
            .predict_top_k(&self.tokenizer, text, &self.mask_token, k)
    }

    /// Identity of the loaded model, for display labels.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Placeholder spelling this pipeline was configured with.
    pub fn mask_token(&self) -> &str {
        &self.mask_token
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M: FillMaskModel> MaskCompleter for FillMaskPipeline<M> {
    fn complete(&self, text: &str) -> Result<Vec<Completion>> {
        self.run(text)
    }

    fn mask_token(&self) -> &str {
        self.mask_token()
    }
}
