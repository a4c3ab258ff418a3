//! Translation of free text into a fixed set of target languages.
//!
//! Translation is delegated to an external service; this module holds the
//! language mapping, the client, and the [`Translator`] seam the orchestrator
//! calls through.

pub mod client;

pub use client::HttpTranslator;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The fixed set of target languages offered by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    English,
    French,
    Chinese,
    Hebrew,
}

impl TargetLanguage {
    /// Language code passed to the translation service.
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::French => "fr",
            TargetLanguage::Chinese => "zh-cn",
            TargetLanguage::Hebrew => "he",
        }
    }

    /// All selectable languages, in display order.
    pub fn all() -> [TargetLanguage; 4] {
        [
            TargetLanguage::English,
            TargetLanguage::French,
            TargetLanguage::Chinese,
            TargetLanguage::Hebrew,
        ]
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TargetLanguage::English => "English",
            TargetLanguage::French => "French",
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::Hebrew => "Hebrew",
        };
        write!(f, "{name}")
    }
}

/// Seam used by the request orchestrator; lets tests substitute a mock
/// translator for the HTTP client.
///
/// Handlers run on actix workers, which do not require `Send` futures, so a
/// bare async method is enough here.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_fixed_mapping() {
        assert_eq!(TargetLanguage::English.code(), "en");
        assert_eq!(TargetLanguage::French.code(), "fr");
        assert_eq!(TargetLanguage::Chinese.code(), "zh-cn");
        assert_eq!(TargetLanguage::Hebrew.code(), "he");
    }

    #[test]
    fn display_names_are_the_ui_labels() {
        let names: Vec<String> = TargetLanguage::all()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(names, ["English", "French", "Chinese", "Hebrew"]);
    }

    #[test]
    fn deserializes_from_display_name() {
        let lang: TargetLanguage = serde_json::from_str("\"Hebrew\"").unwrap();
        assert_eq!(lang, TargetLanguage::Hebrew);
    }
}
