use candle_core::Device;
use tokenizers::Tokenizer;

use crate::error::Result;
use crate::pipelines::fill_mask::pipeline::Completion;

pub trait FillMaskModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: Device) -> Result<Self>
    where
        Self: Sized;

    /// Return the top-k candidates for the first occurrence of `mask_token`
    /// in `text`, ranked by descending score.
    fn predict_top_k(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        mask_token: &str,
        k: usize,
    ) -> Result<Vec<Completion>>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &Device;
}
