//! External classifier configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted classifier timeout.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// External classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Hugging Face API token; the classifier is disabled without one
    pub api_token: Option<Secret<String>>,

    /// Zero-shot model id
    #[serde(default = "default_model")]
    pub model: String,

    /// Inference API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on one classification, text preparation included
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Minimum score of the top label
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    #[serde(default = "default_visual_label")]
    pub visual_label: String,

    #[serde(default = "default_auditory_label")]
    pub auditory_label: String,

    #[serde(default = "default_kinesthetic_label")]
    pub kinesthetic_label: String,

    /// Extra candidate label meaning "no learning style"
    pub rejection_label: Option<String>,

    /// How free text is prepared before classification
    #[serde(default)]
    pub text_preparation: TextPreparation,

    /// Translation model id, used with `TextPreparation::Translate`
    #[serde(default = "default_translation_model")]
    pub translation_model: String,
}

/// Text preparation strategy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextPreparation {
    /// Append English cue phrases from the lexicon
    #[default]
    ContextHints,
    /// Translate through a remote model
    Translate,
    /// Send the text unchanged
    None,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API token, if present and non-empty
    pub fn api_token(&self) -> Option<&str> {
        self.api_token
            .as_ref()
            .map(|token| token.expose_secret().trim())
            .filter(|token| !token.is_empty())
    }

    /// Check if the external classifier is configured
    pub fn has_token(&self) -> bool {
        self.api_token().is_some()
    }

    /// Validate classifier configuration
    ///
    /// A missing token is not an error: the classifier is simply disabled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LEARNSTYLE__AI__MODEL"));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout(self.timeout_secs));
        }

        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ValidationError::InvalidConfidence(self.min_confidence));
        }

        let labels = [
            self.visual_label.trim(),
            self.auditory_label.trim(),
            self.kinesthetic_label.trim(),
        ];
        let distinct = labels
            .iter()
            .enumerate()
            .all(|(i, a)| labels[i + 1..].iter().all(|b| !a.eq_ignore_ascii_case(b)));
        if labels.iter().any(|label| label.is_empty()) || !distinct {
            return Err(ValidationError::InvalidLabels);
        }

        if self.text_preparation == TextPreparation::Translate
            && self.translation_model.trim().is_empty()
        {
            return Err(ValidationError::MissingRequired(
                "LEARNSTYLE__AI__TRANSLATION_MODEL",
            ));
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            min_confidence: default_min_confidence(),
            visual_label: default_visual_label(),
            auditory_label: default_auditory_label(),
            kinesthetic_label: default_kinesthetic_label(),
            rejection_label: None,
            text_preparation: TextPreparation::default(),
            translation_model: default_translation_model(),
        }
    }
}

fn default_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_min_confidence() -> f64 {
    0.30
}

fn default_visual_label() -> String {
    "Visual learner".to_string()
}

fn default_auditory_label() -> String {
    "Auditory learner".to_string()
}

fn default_kinesthetic_label() -> String {
    "Kinesthetic learner".to_string()
}

fn default_translation_model() -> String {
    "Helsinki-NLP/opus-mt-pl-en".to_string()
}
