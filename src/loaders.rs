//! Loading helpers for Hugging Face Hub checkpoints.
//!
//! Every model in this crate is fetched the same way: `tokenizer.json`,
//! `config.json` and a weights file from a model repository, with
//! `model.safetensors` preferred and `pytorch_model.bin` as a fallback for
//! older checkpoints (most Arabic BERT repositories still ship only the
//! latter).

use std::collections::HashMap;

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::error::{Result, TahlilError};

/// Fields of `config.json` that are read directly rather than through the
/// candle model config (label maps and head dimensions).
#[derive(Debug, Clone, Deserialize)]
pub struct HeadConfig {
    pub hidden_size: usize,
    #[serde(default)]
    pub id2label: HashMap<String, String>,
}

pub fn load_tokenizer(repo_id: &str) -> Result<Tokenizer> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));
    let tokenizer_path = repo.get("tokenizer.json")?;
    Tokenizer::from_file(tokenizer_path)
        .map_err(|e| TahlilError::Tokenization(format!("Failed to load tokenizer: {e}")))
}

/// Download `config.json` from `repo_id` and return its raw contents.
pub fn load_config_json(repo_id: &str) -> Result<String> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));
    let config_path = repo.get("config.json")?;
    Ok(std::fs::read_to_string(config_path)?)
}

/// Download the weights of `repo_id` and wrap them in a [`VarBuilder`].
pub fn load_weights(repo_id: &str, device: &Device) -> Result<VarBuilder<'static>> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));

    let weights_path = repo
        .get("model.safetensors")
        .or_else(|_| repo.get("pytorch_model.bin"))?;

    let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
        unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? }
    } else {
        VarBuilder::from_pth(&weights_path, DType::F32, device)?
    };

    Ok(vb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_config_parses_label_map() {
        let raw = r#"{
            "hidden_size": 768,
            "num_attention_heads": 12,
            "id2label": {"0": "O", "1": "B-PERSON"}
        }"#;
        let cfg: HeadConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.hidden_size, 768);
        assert_eq!(cfg.id2label.get("1").unwrap(), "B-PERSON");
    }

    #[test]
    fn head_config_tolerates_missing_labels() {
        let cfg: HeadConfig = serde_json::from_str(r#"{"hidden_size": 512}"#).unwrap();
        assert!(cfg.id2label.is_empty());
    }
}
