use candle_core::Device;
use tokenizers::Tokenizer;

use crate::error::Result;
use crate::pipelines::ner::pipeline::Entity;

pub trait NerModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: Device) -> Result<Self>
    where
        Self: Sized;

    /// Tag `text` and return every annotation with its label and score, in
    /// token order. Non-entity tokens (label `O`) are not returned.
    fn predict(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<Entity>>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &Device;
}
