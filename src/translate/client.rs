use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TargetLanguage, Translator};
use crate::error::{Result, TahlilError};

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible translation endpoint.
///
/// The service receives `(text, target_code)` and returns the translated
/// text; source language detection is left to the service.
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target.code(),
            api_key: self.api_key.as_deref(),
        };

        debug!(target = %target.code(), endpoint = %self.endpoint, "translation request");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TahlilError::Translation(format!(
                "translation service returned {status}: {body}"
            )));
        }

        let response: TranslateResponse = resp.json().await?;
        Ok(response.translated_text)
    }
}
