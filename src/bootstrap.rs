//! Wiring from configuration to a ready analysis handler.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::ai::{
    ContextHintTranslator, DisabledStyleClassifier, ExternalStyleClassifier,
    HuggingFaceClassifier, HuggingFaceConfig, HuggingFaceTranslator, StyleLabels,
};
use crate::application::AnalyzeSurveyHandler;
use crate::config::{AiConfig, AnalysisConfig, AppConfig, TextPreparation, ValidationError};
use crate::domain::analysis::{KeywordLexicon, LexiconError};
use crate::ports::{
    ClassifierError, IdentityTranslator, StyleClassifier, TextTranslator, TranslationError,
};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("failed to create classifier: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("failed to create translator: {0}")]
    Translator(#[from] TranslationError),
}

/// Loads the configured lexicon, or the bundled Polish one.
pub fn load_lexicon(config: &AnalysisConfig) -> Result<Arc<KeywordLexicon>, LexiconError> {
    let lexicon = match &config.lexicon_path {
        Some(path) => KeywordLexicon::from_path(path)?,
        None => KeywordLexicon::polish().clone(),
    };

    let shadowed = lexicon.shadowed_keywords();
    if !shadowed.is_empty() {
        warn!(
            version = lexicon.version(),
            count = shadowed.len(),
            "Lexicon has keywords that contain a negation cue and can never match"
        );
    }

    for overlap in lexicon.overlapping_keywords() {
        warn!(
            keyword = overlap.keyword,
            style = %overlap.style,
            inside_keyword = overlap.inside_keyword,
            inside_style = %overlap.inside_style,
            "Lexicon keyword is contained in another style's keyword"
        );
    }

    Ok(Arc::new(lexicon))
}

/// Builds the open-text classifier; disabled when no token is configured.
/// Context hints honour the same negation window as keyword scoring.
pub fn build_classifier(
    config: &AiConfig,
    lexicon: Arc<KeywordLexicon>,
    negation_window: usize,
) -> Result<Arc<dyn StyleClassifier>, BootstrapError> {
    let Some(token) = config.api_token() else {
        info!("No API token configured, external classifier disabled");
        return Ok(Arc::new(DisabledStyleClassifier));
    };

    let hugging_face = HuggingFaceConfig::new(token)
        .with_base_url(config.base_url.clone())
        .with_timeout(config.timeout());

    let translator: Arc<dyn TextTranslator> = match config.text_preparation {
        TextPreparation::ContextHints => Arc::new(
            ContextHintTranslator::new(lexicon).with_negation_window(negation_window),
        ),
        TextPreparation::Translate => Arc::new(HuggingFaceTranslator::new(
            hugging_face.clone().with_model(config.translation_model.clone()),
        )?),
        TextPreparation::None => Arc::new(IdentityTranslator),
    };

    let zero_shot = HuggingFaceClassifier::new(hugging_face.with_model(config.model.clone()))?;

    let mut classifier = ExternalStyleClassifier::new(Arc::new(zero_shot))
        .with_translator(translator)
        .with_labels(StyleLabels {
            visual: config.visual_label.trim().to_string(),
            auditory: config.auditory_label.trim().to_string(),
            kinesthetic: config.kinesthetic_label.trim().to_string(),
        })
        .with_min_confidence(config.min_confidence)
        .with_timeout(config.timeout());

    if let Some(label) = config
        .rejection_label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
    {
        classifier = classifier.with_rejection_label(label);
    }

    info!(
        model = %config.model,
        preparation = ?config.text_preparation,
        timeout_secs = config.timeout_secs,
        "External classifier enabled"
    );

    Ok(Arc::new(classifier))
}

/// Validates the configuration and assembles the handler.
pub fn build_handler(config: &AppConfig) -> Result<AnalyzeSurveyHandler, BootstrapError> {
    config.validate()?;
    let policy = config.analysis.policy()?;
    let lexicon = load_lexicon(&config.analysis)?;
    let classifier = build_classifier(
        &config.ai,
        Arc::clone(&lexicon),
        policy.keyword_scorer.negation_window,
    )?;
    Ok(AnalyzeSurveyHandler::new(classifier, lexicon, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;
    use std::io::Write;

    #[test]
    fn without_token_classifier_is_disabled() {
        let handler = build_handler(&AppConfig::default()).unwrap();
        assert!(!handler.is_ai_available());
    }

    #[test]
    fn with_token_classifier_is_enabled() {
        let mut config = AppConfig::default();
        config.ai.api_token = Some(Secret::new("hf_test".to_string()));

        let handler = build_handler(&config).unwrap();

        assert!(handler.is_ai_available());
    }

    #[test]
    fn every_preparation_mode_builds() {
        for mode in [
            TextPreparation::ContextHints,
            TextPreparation::Translate,
            TextPreparation::None,
        ] {
            let mut config = AppConfig::default();
            config.ai.api_token = Some(Secret::new("hf_test".to_string()));
            config.ai.text_preparation = mode;
            assert!(build_handler(&config).is_ok(), "{:?}", mode);
        }
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut config = AppConfig::default();
        config.analysis.min_open_weight = 10;
        assert!(matches!(
            build_handler(&config),
            Err(BootstrapError::Validation(_))
        ));
    }

    #[test]
    fn lexicon_path_override_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "version: custom-1\nnegations: [not]\nkeywords:\n  VISUAL: [see]\n  AUDITORY: [hear]\n  KINESTHETIC: [move]\n"
        )
        .unwrap();

        let config = AnalysisConfig {
            lexicon_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert_eq!(load_lexicon(&config).unwrap().version(), "custom-1");
    }

    #[test]
    fn missing_lexicon_file_is_an_error() {
        let config = AnalysisConfig {
            lexicon_path: Some("/nonexistent/lexicon.yaml".into()),
            ..Default::default()
        };
        assert!(matches!(load_lexicon(&config), Err(LexiconError::Io { .. })));
    }
}
