//! BERT model wrappers for the NER and fill-mask pipelines.
//!
//! Uses `candle_transformers::models::bert` for the underlying implementation.
//! Checkpoints are addressed by Hub identity rather than a fixed size enum:
//! the Arabic models this crate targets (asafaya, CAMeL-Lab, hatmimoha) are
//! all BERT-base architecture with differing heads.

use std::collections::HashMap;
use std::sync::Arc;

use candle_core::{Device, IndexOp, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::{Linear, Module};
use candle_transformers::models::bert::{BertForMaskedLM, BertModel, Config};
use tokenizers::{Encoding, Tokenizer};

use super::ModelId;
use crate::error::{Result, TahlilError};
use crate::loaders::{load_config_json, load_tokenizer, load_weights, HeadConfig};
use crate::pipelines::fill_mask::pipeline::Completion;
use crate::pipelines::ner::pipeline::Entity;

/// Token-classification model: a BERT encoder with a linear tagging head and
/// the checkpoint's `id2label` map.
#[derive(Clone)]
pub struct BertNerModel {
    model: Arc<BertModel>,
    classifier: Linear,
    id2label: HashMap<String, String>,
    device: Device,
}

impl BertNerModel {
    pub fn new(id: ModelId, device: Device) -> Result<Self> {
        let config_str = load_config_json(&id.0)?;
        let config: Config = serde_json::from_str(&config_str)?;
        let head: HeadConfig = serde_json::from_str(&config_str)?;

        if head.id2label.is_empty() {
            return Err(TahlilError::Unexpected(format!(
                "'{id}' has no id2label map; not a token-classification checkpoint"
            )));
        }

        let vb = load_weights(&id.0, &device)?;
        // BertModel::load retries with the `bert.` prefix that
        // token-classification checkpoints carry.
        let model = BertModel::load(vb.clone(), &config)?;
        let classifier = candle_nn::linear(
            head.hidden_size,
            head.id2label.len(),
            vb.pp("classifier"),
        )?;

        Ok(Self {
            model: Arc::new(model),
            classifier,
            id2label: head.id2label,
            device,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn predict(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<Entity>> {
        let encoding = encode(tokenizer, text)?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let logits = self.classifier.forward(&hidden)?;
        let probs = softmax(&logits, D::Minus1)?.squeeze(0)?;
        let probs_rows = probs.to_vec2::<f32>()?;

        let special = encoding.get_special_tokens_mask();
        let offsets = encoding.get_offsets();
        let tokens = encoding.get_tokens();

        let mut entities = Vec::new();
        for (i, row) in probs_rows.iter().enumerate() {
            if special.get(i).copied().unwrap_or(1) == 1 {
                continue;
            }
            let Some((best, score)) = argmax(row) else {
                continue;
            };
            let label = match self.id2label.get(&best.to_string()) {
                Some(label) if label != "O" => label.clone(),
                _ => continue,
            };
            let (start, end) = offsets[i];
            let word = text
                .get(start..end)
                .map(str::to_string)
                .unwrap_or_else(|| tokens[i].clone());
            entities.push(Entity {
                word,
                label,
                score,
                start,
                end,
            });
        }

        Ok(entities)
    }

    pub fn get_tokenizer(id: ModelId) -> Result<Tokenizer> {
        load_tokenizer(&id.0)
    }
}

impl crate::pipelines::ner::model::NerModel for BertNerModel {
    type Options = ModelId;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        BertNerModel::new(options, device)
    }

    fn predict(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<Entity>> {
        self.predict(tokenizer, text)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        Self::get_tokenizer(options)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

/// Fill-mask model using a BERT masked-LM head.
#[derive(Clone)]
pub struct BertFillMaskModel {
    model: Arc<BertForMaskedLM>,
    device: Device,
}

impl BertFillMaskModel {
    pub fn new(id: ModelId, device: Device) -> Result<Self> {
        let config_str = load_config_json(&id.0)?;
        let config: Config = serde_json::from_str(&config_str)?;

        let vb = load_weights(&id.0, &device)?;
        let model = BertForMaskedLM::load(vb, &config)?;

        Ok(Self {
            model: Arc::new(model),
            device,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn predict_top_k(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        mask_token: &str,
        k: usize,
    ) -> Result<Vec<Completion>> {
        if k == 0 {
            return Ok(vec![]);
        }

        let mask_id = tokenizer.token_to_id(mask_token).ok_or_else(|| {
            TahlilError::Tokenization(format!(
                "tokenizer has no '{mask_token}' token; wrong placeholder spelling for this model"
            ))
        })?;

        let encoding = encode(tokenizer, text)?;
        let mask_index = encoding
            .get_ids()
            .iter()
            .position(|&id| id == mask_id)
            .ok_or_else(|| {
                TahlilError::InvalidInput(format!("no '{mask_token}' placeholder found in input"))
            })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let logits = logits.squeeze(0)?.i((mask_index, ..))?;
        let probs = softmax(&logits, D::Minus1)?;
        let probs_vec = probs.to_vec1::<f32>()?;

        if probs_vec.is_empty() {
            return Ok(vec![]);
        }

        let mut idxs: Vec<usize> = (0..probs_vec.len()).collect();
        idxs.sort_by(|&i, &j| probs_vec[j].total_cmp(&probs_vec[i]));
        idxs.truncate(k.min(idxs.len()));

        let mut out = Vec::with_capacity(idxs.len());
        for idx in idxs {
            let token = tokenizer
                .decode(&[idx as u32], true)
                .unwrap_or_default()
                .trim()
                .to_string();
            if token.is_empty() {
                continue;
            }
            out.push(Completion {
                sequence: text.replacen(mask_token, &token, 1),
                token,
                score: probs_vec[idx],
            });
        }

        Ok(out)
    }

    pub fn get_tokenizer(id: ModelId) -> Result<Tokenizer> {
        load_tokenizer(&id.0)
    }
}

impl crate::pipelines::fill_mask::model::FillMaskModel for BertFillMaskModel {
    type Options = ModelId;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        BertFillMaskModel::new(options, device)
    }

    fn predict_top_k(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        mask_token: &str,
        k: usize,
    ) -> Result<Vec<Completion>> {
        self.predict_top_k(tokenizer, text, mask_token, k)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        Self::get_tokenizer(options)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

fn encode(tokenizer: &Tokenizer, text: &str) -> Result<Encoding> {
    tokenizer
        .encode(text, true)
        .map_err(|e| TahlilError::Tokenization(format!("Tokenization error: {e}")))
}

fn argmax(row: &[f32]) -> Option<(usize, f32)> {
    row.iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, &v)| (i, v))
}
