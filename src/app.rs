//! Request orchestration: wires user input to the three collaborators and
//! applies the validation and filter rules.
//!
//! Every operation is stateless and idempotent: one user action performs at
//! most one call into a collaborator and returns its rendered form. Blank
//! input is a no-op for all three operations (`Ok(None)`, nothing invoked).

use serde::Serialize;

use crate::error::{Result, TahlilError};
use crate::pipelines::fill_mask::pipeline::{Completion, MaskCompleter};
use crate::pipelines::ner::pipeline::{Entity, EntityRecognizer};
use crate::translate::{TargetLanguage, Translator};

/// Minimum confidence for an entity annotation to be shown. Applies to the
/// recognize path only; completion candidates are shown unfiltered.
pub const CONFIDENCE_THRESHOLD: f32 = 0.8;

/// Entities retained after threshold filtering, with the identity of the
/// model that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct NerReport {
    pub model_id: String,
    pub entities: Vec<Entity>,
}

/// A translation labeled with its target language's display name.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationReport {
    pub language: String,
    pub text: String,
}

/// The request orchestrator: owns one handle per collaborator, initialized
/// once per process and shared read-only across requests.
pub struct Workbench<R, C, T> {
    recognizer: R,
    completer: C,
    translator: T,
}

impl<R, C, T> Workbench<R, C, T>
where
    R: EntityRecognizer,
    C: MaskCompleter,
    T: Translator,
{
    pub fn new(recognizer: R, completer: C, translator: T) -> Self {
        Self {
            recognizer,
            completer,
            translator,
        }
    }

    /// Recognize entities in `text`, retaining only annotations with
    /// confidence at or above [`CONFIDENCE_THRESHOLD`], in service order.
    pub fn recognize(&self, text: &str) -> Result<Option<NerReport>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let mut entities = self.recognizer.recognize(text)?;
        entities.retain(|e| e.score >= CONFIDENCE_THRESHOLD);

        Ok(Some(NerReport {
            model_id: self.recognizer.model_id().to_string(),
            entities,
        }))
    }

    /// Rank completions for the single mask placeholder in `text`.
    ///
    /// The placeholder must occur exactly once; otherwise the completion
    /// service is never invoked and a validation error is returned. Returned
    /// candidates keep the service's count and order.
    pub fn complete(&self, text: &str) -> Result<Option<Vec<Completion>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let mask = self.completer.mask_token();
        let occurrences = text.matches(mask).count();
        if occurrences != 1 {
            return Err(TahlilError::InvalidInput(format!(
                "input must contain '{mask}' exactly once (found {occurrences})"
            )));
        }

        Ok(Some(self.completer.complete(text)?))
    }

    /// Translate `text` into `target`, labeling the result with the target's
    /// display name.
    pub async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<Option<TranslationReport>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let translated = self.translator.translate(text, target).await?;
        Ok(Some(TranslationReport {
            language: target.to_string(),
            text: translated,
        }))
    }

    /// Identity of the active NER model (primary or fallback).
    pub fn ner_model_id(&self) -> &str {
        self.recognizer.model_id()
    }

    /// Placeholder spelling the completion model expects.
    pub fn mask_token(&self) -> &str {
        self.completer.mask_token()
    }
}
