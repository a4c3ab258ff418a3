//! Named-entity recognition pipeline.
//!
//! Tags spans of text with categories such as person, organization and
//! location, together with a confidence score. The pipeline returns every
//! annotation the model produced, in model order; confidence filtering is a
//! caller concern.
//!
//! The builder carries the model-selection policy: a primary model identity
//! and an optional always-available fallback that is substituted once, at
//! build time, if the primary fails to load.
//!
//! ```rust,no_run
//! use tahlil::models::BertNerModel;
//! use tahlil::pipelines::ner::NerPipelineBuilder;
//!
//! # fn main() -> tahlil::error::Result<()> {
//! let pipeline = NerPipelineBuilder::new("hatmimoha/arabic-ner")
//!     .fallback("CAMeL-Lab/bert-base-arabic-camelbert-msa-ner")
//!     .build::<BertNerModel>()?;
//!
//! for entity in pipeline.run("أحمد يعمل في جوجل")? {
//!     println!("{}: {} ({:.4})", entity.word, entity.label, entity.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::NerPipelineBuilder;
pub use model::NerModel;
pub use pipeline::{Entity, EntityRecognizer, NerPipeline};
