//! # Tahlil
//!
//! Arabic text workbench: paste text into one RTL page and recognize named
//! entities, complete a masked sentence, or translate into a fixed set of
//! target languages. Inference runs locally through candle-backed pipelines;
//! translation goes through an external service client.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod loaders;
pub mod models;
pub mod pipelines;
pub mod translate;

pub use app::{NerReport, TranslationReport, Workbench, CONFIDENCE_THRESHOLD};
pub use error::{Result, TahlilError};
pub use models::{BertFillMaskModel, BertNerModel, ModelId};
