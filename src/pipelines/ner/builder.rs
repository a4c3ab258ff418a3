use candle_core::Device;
use tracing::{info, warn};

use super::model::NerModel;
use super::pipeline::NerPipeline;
use crate::error::Result;
use crate::models::ModelId;
use crate::pipelines::cache::{build_cache_key, global_cache};
use crate::pipelines::utils::DeviceRequest;

/// Builder for [`NerPipeline`] instances.
///
/// Loading happens through the global model cache, so building the same
/// identity twice in one process reuses the weights. If a fallback identity is
/// configured, a primary load failure substitutes it once; the substitution is
/// recorded in the pipeline's [`model_id`](NerPipeline::model_id) and logged.
pub struct NerPipelineBuilder {
    primary: ModelId,
    fallback: Option<ModelId>,
    device_request: DeviceRequest,
}

impl NerPipelineBuilder {
    pub fn new(primary: impl Into<ModelId>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
            device_request: DeviceRequest::Default,
        }
    }

    /// Identity to substitute if the primary model fails to load.
    pub fn fallback(mut self, fallback: impl Into<ModelId>) -> Self {
        self.fallback = Some(fallback.into());
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

    /// Builds the pipeline, applying the primary-then-fallback policy.
    ///
    /// # Errors
    ///
    /// Returns an error if device initialization fails, or if loading fails
    /// for the primary identity and no fallback is configured (or the
    /// fallback fails too).
    pub fn build<M>(self) -> Result<NerPipeline<M>>
    where
        M: NerModel<Options = ModelId> + Clone + Send + Sync + 'static,
    {
        let device = self.device_request.clone().resolve()?;

        let (model, active) = match load_cached::<M>(&self.primary, &device) {
            Ok(model) => (model, self.primary.clone()),
            Err(primary_err) => match &self.fallback {
                Some(fallback) => {
                    warn!(
                        primary = %self.primary,
                        fallback = %fallback,
                        error = %primary_err,
                        "primary NER model failed to load, substituting fallback"
                    );
                    (load_cached::<M>(fallback, &device)?, fallback.clone())
                }
                None => return Err(primary_err),
            },
        };

        info!(model = %active, "NER model ready");
        let tokenizer = M::get_tokenizer(active.clone())?;

        Ok(NerPipeline {
            model,
            tokenizer,
            model_id: active.to_string(),
        })
    }
}

fn load_cached<M>(id: &ModelId, device: &Device) -> Result<M>
where
    M: NerModel<Options = ModelId> + Clone + Send + Sync + 'static,
{
    let key = build_cache_key(id, device);
    global_cache().get_or_create(&key, || M::new(id.clone(), device.clone()))
}
