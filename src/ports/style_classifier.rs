//! Style Classifier Port - Outcome-level open-text classification.
//!
//! Implementations never fail: every transport problem is absorbed into
//! `ClassificationOutcome::Indeterminate` so the caller can fall back to
//! keyword scoring.

use async_trait::async_trait;

use crate::domain::analysis::ClassificationOutcome;

use super::zero_shot_classifier::ClassifierInfo;

/// Port for classifying free text into a learning style.
#[async_trait]
pub trait StyleClassifier: Send + Sync {
    /// Classifies the text. Exactly one remote attempt, bounded in time.
    async fn classify(&self, text: &str) -> ClassificationOutcome;

    /// True when the classifier is configured. Says nothing about whether
    /// the remote service is reachable right now.
    fn is_available(&self) -> bool;

    /// Get classifier information (name, model).
    fn classifier_info(&self) -> ClassifierInfo;
}
