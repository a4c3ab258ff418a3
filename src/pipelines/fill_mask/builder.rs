use tracing::info;

use super::model::FillMaskModel;
use super::pipeline::FillMaskPipeline;
use crate::error::Result;
use crate::models::ModelId;
use crate::pipelines::cache::{build_cache_key, global_cache};
use crate::pipelines::utils::DeviceRequest;

/// Number of candidates returned when the caller does not ask otherwise.
const DEFAULT_TOP_K: usize = 5;

/// Builder for [`FillMaskPipeline`] instances.
pub struct FillMaskPipelineBuilder {
    model_id: ModelId,
    mask_token: String,
    top_k: usize,
    device_request: DeviceRequest,
}

impl FillMaskPipelineBuilder {
    pub fn new(model_id: impl Into<ModelId>) -> Self {
        Self {
            model_id: model_id.into(),
            mask_token: "[MASK]".to_string(),
            top_k: DEFAULT_TOP_K,
            device_request: DeviceRequest::Default,
        }
    }

    /// Placeholder spelling the model expects. `[MASK]` by default; set to
    /// `<mask>` for RoBERTa-family checkpoints.
    pub fn mask_token(mut self, mask_token: impl Into<String>) -> Self {
        self.mask_token = mask_token.into();
        self
    }

    /// Default number of ranked candidates per call.
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Force CPU even if CUDA is available.
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build<M>(self) -> Result<FillMaskPipeline<M>>
    where
        M: FillMaskModel<Options = ModelId> + Clone + Send + Sync + 'static,
    {
        let device = self.device_request.clone().resolve()?;

        let key = build_cache_key(&self.model_id, &device);
        let model = global_cache().get_or_create(&key, || {
            M::new(self.model_id.clone(), device.clone())
        })?;

        info!(model = %self.model_id, "fill-mask model ready");
        let tokenizer = M::get_tokenizer(self.model_id.clone())?;

        Ok(FillMaskPipeline {
            model,
            tokenizer,
            model_id: self.model_id.to_string(),
            mask_token: self.mask_token,
            top_k: self.top_k,
        })
    }
}
