//! Zero-Shot Classifier Port - Transport-level interface to a remote
//! natural-language-inference model.
//!
//! The model ranks a set of candidate labels against an input text. This
//! port only moves requests and rankings; turning a ranking into a learning
//! style (thresholds, label mapping, fallbacks) belongs to the
//! `StyleClassifier` built on top of it.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedClassifier;
//!
//! #[async_trait]
//! impl ZeroShotClassifier for FixedClassifier {
//!     async fn classify(&self, request: ZeroShotRequest) -> Result<ZeroShotPrediction, ClassifierError> {
//!         Ok(ZeroShotPrediction::new(vec![LabelScore::new("Visual learner", 0.9)]))
//!     }
//!
//!     fn classifier_info(&self) -> ClassifierInfo {
//!         ClassifierInfo::new("fixed", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for remote zero-shot classification.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Ranks the candidate labels against the input text.
    async fn classify(&self, request: ZeroShotRequest)
        -> Result<ZeroShotPrediction, ClassifierError>;

    /// Get classifier information (name, model).
    fn classifier_info(&self) -> ClassifierInfo;
}

/// Request for zero-shot classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroShotRequest {
    /// Text to classify.
    pub inputs: String,
    /// Labels the model chooses between.
    pub candidate_labels: Vec<String>,
    /// Whether labels are scored independently instead of as one distribution.
    pub multi_label: bool,
}

impl ZeroShotRequest {
    /// Creates a single-label request.
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            candidate_labels: Vec::new(),
            multi_label: false,
        }
    }

    /// Adds a candidate label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.candidate_labels.push(label.into());
        self
    }

    /// Adds several candidate labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_labels
            .extend(labels.into_iter().map(Into::into));
        self
    }
}

/// One label with its model score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Labels ranked by descending score.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZeroShotPrediction {
    ranked: Vec<LabelScore>,
}

impl ZeroShotPrediction {
    /// Creates a prediction, sorting the labels by descending score.
    ///
    /// NaN scores sort last.
    pub fn new(mut labels: Vec<LabelScore>) -> Self {
        labels.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or_else(|| a.score.is_nan().cmp(&b.score.is_nan()))
        });
        Self { ranked: labels }
    }

    /// The highest-ranked label, if any.
    pub fn top(&self) -> Option<&LabelScore> {
        self.ranked.first()
    }

    pub fn ranked(&self) -> &[LabelScore] {
        &self.ranked
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Classifier information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierInfo {
    /// Classifier name (e.g., "huggingface", "mock").
    pub name: String,
    /// Model identifier (e.g., "facebook/bart-large-mnli").
    pub model: String,
}

impl ClassifierInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Zero-shot classifier errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// Request did not finish in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a server error, or the model is still loading.
    #[error("classifier unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Rate limited by the service.
    #[error("rate limited")]
    RateLimited,

    /// API token rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClassifierError {
    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_collects_labels() {
        let request = ZeroShotRequest::new("text")
            .with_label("Visual learner")
            .with_labels(["Auditory learner", "Kinesthetic learner"]);

        assert_eq!(request.inputs, "text");
        assert_eq!(request.candidate_labels.len(), 3);
        assert!(!request.multi_label);
    }

    #[test]
    fn prediction_ranks_by_descending_score() {
        let prediction = ZeroShotPrediction::new(vec![
            LabelScore::new("a", 0.1),
            LabelScore::new("b", 0.7),
            LabelScore::new("c", 0.2),
        ]);

        assert_eq!(prediction.top().unwrap().label, "b");
        let order: Vec<&str> = prediction.ranked().iter().map(|l| l.label.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn nan_scores_rank_last() {
        let prediction = ZeroShotPrediction::new(vec![
            LabelScore::new("nan", f64::NAN),
            LabelScore::new("low", 0.1),
        ]);
        assert_eq!(prediction.top().unwrap().label, "low");
    }

    #[test]
    fn empty_prediction_has_no_top() {
        assert!(ZeroShotPrediction::default().top().is_none());
    }
}
