//! Text Translator Port - Prepares free text before zero-shot classification.
//!
//! The bundled models understand English best. A translator either
//! translates the text or enriches it with English cue phrases.

use async_trait::async_trait;

/// Port for preparing text for the classifier.
#[async_trait]
pub trait TextTranslator: Send + Sync {
    /// Returns the text to send to the classifier.
    async fn prepare(&self, text: &str) -> Result<String, TranslationError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Text preparation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslationError {
    /// Request did not finish in time.
    #[error("translation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with an error status.
    #[error("translation service returned status {status}")]
    Status { status: u16 },

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Translation produced no text.
    #[error("translation produced empty text")]
    Empty,
}

/// Passes text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl TextTranslator for IdentityTranslator {
    async fn prepare(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_translator_returns_input() {
        let prepared = IdentityTranslator.prepare("lubię słuchać").await.unwrap();
        assert_eq!(prepared, "lubię słuchać");
        assert_eq!(IdentityTranslator.name(), "none");
    }
}
