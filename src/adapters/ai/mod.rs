//! AI Classifier Adapters.
//!
//! Implementations of the classification ports.
//!
//! ## Available Adapters
//!
//! - `HuggingFaceClassifier` - Zero-shot NLI models on the Hugging Face Inference API
//! - `HuggingFaceTranslator` - Translation models on the same API
//! - `ContextHintTranslator` - Offline English cue phrases from the lexicon
//! - `ExternalStyleClassifier` - Threshold, label mapping and timeout over a zero-shot model
//! - `DisabledStyleClassifier` - Stand-in when no API token is configured
//! - `MockZeroShotClassifier` - Configurable mock for testing

mod context_hint_translator;
mod disabled_classifier;
mod external_style_classifier;
mod huggingface_classifier;
mod huggingface_client;
mod huggingface_translator;
mod mock_classifier;

pub use context_hint_translator::ContextHintTranslator;
pub use disabled_classifier::DisabledStyleClassifier;
pub use external_style_classifier::{ExternalStyleClassifier, StyleLabels, DEFAULT_MIN_CONFIDENCE};
pub use huggingface_classifier::HuggingFaceClassifier;
pub use huggingface_client::{HuggingFaceConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use huggingface_translator::{HuggingFaceTranslator, DEFAULT_TRANSLATION_MODEL};
pub use mock_classifier::{MockClassification, MockZeroShotClassifier};
