//! Hugging Face Translator - Implementation of TextTranslator that calls a
//! translation model (e.g., "Helsinki-NLP/opus-mt-pl-en").

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::{TextTranslator, TranslationError};

use super::huggingface_client::{HuggingFaceConfig, InferenceClient, InferenceFailure};

/// Default Polish to English translation model.
pub const DEFAULT_TRANSLATION_MODEL: &str = "Helsinki-NLP/opus-mt-pl-en";

/// Translates free text through the Hugging Face Inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceTranslator {
    client: InferenceClient,
}

impl HuggingFaceTranslator {
    /// Creates a translator; `config.model` names the translation model.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, TranslationError> {
        let client = InferenceClient::new(config).map_err(|e| {
            TranslationError::Network(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextTranslator for HuggingFaceTranslator {
    async fn prepare(&self, text: &str) -> Result<String, TranslationError> {
        let raw = self
            .client
            .post_json(&HfTranslationRequest { inputs: text })
            .await
            .map_err(|failure| match failure {
                InferenceFailure::Timeout => TranslationError::Timeout {
                    timeout_secs: self.client.config().timeout.as_secs(),
                },
                InferenceFailure::Network(message) => TranslationError::Network(message),
                InferenceFailure::Status { status, .. } => TranslationError::Status { status },
            })?;

        parse_translation(&raw)
    }

    fn name(&self) -> &'static str {
        "translate"
    }
}

fn parse_translation(raw: &str) -> Result<String, TranslationError> {
    let outputs: Vec<HfTranslationOutput> = serde_json::from_str(raw)
        .map_err(|e| TranslationError::Parse(format!("Failed to parse response: {}", e)))?;

    let text = outputs
        .into_iter()
        .next()
        .map(|output| output.translation_text.trim().to_string())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(TranslationError::Empty);
    }
    Ok(text)
}

#[derive(Debug, Serialize)]
struct HfTranslationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct HfTranslationOutput {
    translation_text: String,
}
