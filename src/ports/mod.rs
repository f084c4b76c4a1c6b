//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Classification Ports
//!
//! - `StyleClassifier` - Free text to learning style, never fails
//! - `ZeroShotClassifier` - Remote label ranking, typed transport errors
//! - `TextTranslator` - Text preparation before classification

mod style_classifier;
mod text_translator;
mod zero_shot_classifier;

pub use style_classifier::StyleClassifier;
pub use text_translator::{IdentityTranslator, TextTranslator, TranslationError};
pub use zero_shot_classifier::{
    ClassifierError, ClassifierInfo, LabelScore, ZeroShotClassifier, ZeroShotPrediction,
    ZeroShotRequest,
};
