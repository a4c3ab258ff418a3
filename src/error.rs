//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`TahlilError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`TahlilError`] as the error type.
pub type Result<T> = std::result::Result<T, TahlilError>;

/// The unified error type for all crate errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TahlilError {
    /// Network or download failure. Retry may help.
    #[error("{0}")]
    Download(String),

    /// Tokenization failure. Check input text.
    #[error("{0}")]
    Tokenization(String),

    /// Model inference failure.
    #[error("{0}")]
    Inference(String),

    /// Device initialization failure. Fall back to CPU.
    #[error("{0}")]
    Device(String),

    /// The user's input was rejected before any service was invoked.
    #[error("{0}")]
    InvalidInput(String),

    /// Translation service failure.
    #[error("{0}")]
    Translation(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl TahlilError {
    /// True when the error is a pre-invocation validation failure rather than
    /// a collaborator failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TahlilError::InvalidInput(_))
    }
}

impl From<hf_hub::api::sync::ApiError> for TahlilError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        TahlilError::Download(format!("HuggingFace API error: {value}"))
    }
}

impl From<candle_core::Error> for TahlilError {
    fn from(value: candle_core::Error) -> Self {
        TahlilError::Inference(value.to_string())
    }
}

impl From<std::io::Error> for TahlilError {
    fn from(value: std::io::Error) -> Self {
        TahlilError::Unexpected(value.to_string())
    }
}

impl From<serde_json::Error> for TahlilError {
    fn from(value: serde_json::Error) -> Self {
        TahlilError::Unexpected(value.to_string())
    }
}

impl From<reqwest::Error> for TahlilError {
    fn from(value: reqwest::Error) -> Self {
        TahlilError::Translation(value.to_string())
    }
}
