//! Masked language modeling pipeline.
//!
//! Fill-mask predicts the most likely word(s) for a mask placeholder in text
//! and returns ranked candidate sentences with confidence scores. The
//! placeholder spelling is a pipeline option tied to the model identity:
//! BERT-family checkpoints expect `[MASK]`, RoBERTa-family ones `<mask>`.
//!
//! ```rust,no_run
//! use tahlil::models::BertFillMaskModel;
//! use tahlil::pipelines::fill_mask::FillMaskPipelineBuilder;
//!
//! # fn main() -> tahlil::error::Result<()> {
//! let pipeline = FillMaskPipelineBuilder::new("asafaya/bert-base-arabic")
//!     .build::<BertFillMaskModel>()?;
//!
//! for candidate in pipeline.run("الطقس [MASK] اليوم")? {
//!     println!("{} ({:.4})", candidate.sequence, candidate.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::FillMaskPipelineBuilder;
pub use model::FillMaskModel;
pub use pipeline::{Completion, FillMaskPipeline, MaskCompleter};
