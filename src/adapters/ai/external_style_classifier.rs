//! External Style Classifier - StyleClassifier backed by a remote zero-shot
//! model.
//!
//! Prepares the text, asks the model to rank one label per style, and reads
//! the top label. Everything that is not a confident, known label becomes
//! `Indeterminate`:
//!
//! - preparation failure, transport error or timeout (logged with `warn!`)
//! - score below `min_confidence`
//! - the rejection label, or a label that maps to no style
//!
//! # Example
//!
//! ```ignore
//! let classifier = ExternalStyleClassifier::new(Arc::new(hugging_face))
//!     .with_translator(Arc::new(ContextHintTranslator::new(lexicon)))
//!     .with_min_confidence(0.3)
//!     .with_timeout(Duration::from_secs(30));
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::analysis::ClassificationOutcome;
use crate::domain::foundation::Style;
use crate::ports::{
    ClassifierError, ClassifierInfo, IdentityTranslator, StyleClassifier, TextTranslator,
    TranslationError, ZeroShotClassifier, ZeroShotPrediction, ZeroShotRequest,
};

use super::huggingface_client::DEFAULT_TIMEOUT;

/// Default minimum score of the top label.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.30;

/// Candidate label text per style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLabels {
    pub visual: String,
    pub auditory: String,
    pub kinesthetic: String,
}

impl Default for StyleLabels {
    fn default() -> Self {
        Self {
            visual: "Visual learner".to_string(),
            auditory: "Auditory learner".to_string(),
            kinesthetic: "Kinesthetic learner".to_string(),
        }
    }
}

impl StyleLabels {
    pub fn label(&self, style: Style) -> &str {
        match style {
            Style::Visual => &self.visual,
            Style::Auditory => &self.auditory,
            Style::Kinesthetic => &self.kinesthetic,
        }
    }

    /// Style whose label equals `label`, ignoring ASCII case.
    pub fn style_for(&self, label: &str) -> Option<Style> {
        let label = label.trim();
        Style::ALL
            .into_iter()
            .find(|style| self.label(*style).eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, thiserror::Error)]
enum ExternalFailure {
    #[error("text preparation failed: {0}")]
    Preparation(#[from] TranslationError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Outcome-level classifier over a `ZeroShotClassifier`.
pub struct ExternalStyleClassifier {
    classifier: Arc<dyn ZeroShotClassifier>,
    translator: Arc<dyn TextTranslator>,
    labels: StyleLabels,
    rejection_label: Option<String>,
    min_confidence: f64,
    timeout: Duration,
}

impl ExternalStyleClassifier {
    /// Creates a classifier with default labels, no text preparation,
    /// the default threshold and the default timeout.
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        Self {
            classifier,
            translator: Arc::new(IdentityTranslator),
            labels: StyleLabels::default(),
            rejection_label: None,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the text preparation step.
    pub fn with_translator(mut self, translator: Arc<dyn TextTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Sets the candidate labels.
    pub fn with_labels(mut self, labels: StyleLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Adds a label that, when ranked first, means "no learning style".
    pub fn with_rejection_label(mut self, label: impl Into<String>) -> Self {
        self.rejection_label = Some(label.into());
        self
    }

    /// Sets the minimum score of the top label.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Sets the bound on preparation plus classification.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn request_for(&self, text: String) -> ZeroShotRequest {
        let request = ZeroShotRequest::new(text)
            .with_labels(Style::ALL.into_iter().map(|style| self.labels.label(style)));
        match &self.rejection_label {
            Some(label) => request.with_label(label.as_str()),
            None => request,
        }
    }

    async fn request(&self, text: &str) -> Result<ZeroShotPrediction, ExternalFailure> {
        let prepared = self.translator.prepare(text).await?;
        debug!(translator = self.translator.name(), prepared = %prepared, "Prepared text");
        Ok(self.classifier.classify(self.request_for(prepared)).await?)
    }

    /// Reads the top label of a ranking.
    fn interpret(&self, prediction: &ZeroShotPrediction) -> ClassificationOutcome {
        let Some(top) = prediction.top() else {
            warn!("Classifier returned no labels");
            return ClassificationOutcome::Indeterminate;
        };

        if self
            .rejection_label
            .as_deref()
            .is_some_and(|rejection| rejection.eq_ignore_ascii_case(top.label.trim()))
        {
            info!(score = top.score, "Classifier rejected the text");
            return ClassificationOutcome::Indeterminate;
        }

        if top.score.is_nan() || top.score < self.min_confidence {
            info!(
                label = %top.label,
                score = top.score,
                min_confidence = self.min_confidence,
                "Classifier confidence below threshold"
            );
            return ClassificationOutcome::Indeterminate;
        }

        match self.labels.style_for(&top.label) {
            Some(style) => {
                info!(
                    label = %top.label,
                    score = top.score,
                    style = %style,
                    "Classifier detected style"
                );
                ClassificationOutcome::Detected(style)
            }
            None => {
                warn!(label = %top.label, "Classifier returned an unknown label");
                ClassificationOutcome::Indeterminate
            }
        }
    }
}

#[async_trait]
impl StyleClassifier for ExternalStyleClassifier {
    async fn classify(&self, text: &str) -> ClassificationOutcome {
        let info = self.classifier.classifier_info();
        match tokio::time::timeout(self.timeout, self.request(text)).await {
            Ok(Ok(prediction)) => self.interpret(&prediction),
            Ok(Err(err)) => {
                warn!(
                    classifier = %info.name,
                    model = %info.model,
                    error = %err,
                    "External classification failed"
                );
                ClassificationOutcome::Indeterminate
            }
            Err(_) => {
                warn!(
                    classifier = %info.name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "External classification timed out"
                );
                ClassificationOutcome::Indeterminate
            }
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn classifier_info(&self) -> ClassifierInfo {
        self.classifier.classifier_info()
    }
}
