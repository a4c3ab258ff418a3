//! Environment-driven configuration.
//!
//! Every setting has a default so the binary runs with no environment at all;
//! `.env` files are honored via `dotenv` in `main`.

use std::env;

/// Application configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Primary NER model identity.
    pub ner_primary: String,
    /// Always-available NER identity substituted if the primary fails to load.
    pub ner_fallback: String,
    /// Fill-mask model identity.
    pub fill_mask_model: String,
    /// Mask placeholder spelling the fill-mask model expects.
    pub mask_token: String,
    /// Translation service endpoint (LibreTranslate-compatible).
    pub translate_endpoint: String,
    /// Optional API key for the translation service.
    pub translate_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            ner_primary: "hatmimoha/arabic-ner".to_string(),
            ner_fallback: "CAMeL-Lab/bert-base-arabic-camelbert-msa-ner".to_string(),
            fill_mask_model: "asafaya/bert-base-arabic".to_string(),
            mask_token: "[MASK]".to_string(),
            translate_endpoint: "https://libretranslate.com/translate".to_string(),
            translate_api_key: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `TAHLIL_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_or("TAHLIL_BIND", defaults.bind_addr),
            ner_primary: env_or("TAHLIL_NER_MODEL", defaults.ner_primary),
            ner_fallback: env_or("TAHLIL_NER_FALLBACK", defaults.ner_fallback),
            fill_mask_model: env_or("TAHLIL_FILL_MASK_MODEL", defaults.fill_mask_model),
            mask_token: env_or("TAHLIL_MASK_TOKEN", defaults.mask_token),
            translate_endpoint: env_or("TAHLIL_TRANSLATE_URL", defaults.translate_endpoint),
            translate_api_key: env::var("TAHLIL_TRANSLATE_API_KEY").ok(),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bert_family() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.mask_token, "[MASK]");
        assert!(cfg.ner_primary.contains('/'));
        assert!(cfg.ner_fallback.contains('/'));
        assert!(cfg.translate_api_key.is_none());
    }
}
