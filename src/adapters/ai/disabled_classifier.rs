//! Disabled Style Classifier - used when no API token is configured.

use async_trait::async_trait;

use crate::domain::analysis::ClassificationOutcome;
use crate::ports::{ClassifierInfo, StyleClassifier};

/// Never classifies and reports itself unavailable, so keyword scoring
/// handles all free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStyleClassifier;

#[async_trait]
impl StyleClassifier for DisabledStyleClassifier {
    async fn classify(&self, _text: &str) -> ClassificationOutcome {
        ClassificationOutcome::Indeterminate
    }

    fn is_available(&self) -> bool {
        false
    }

    fn classifier_info(&self) -> ClassifierInfo {
        ClassifierInfo::new("disabled", "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn is_unavailable_and_indeterminate() {
        let classifier = DisabledStyleClassifier;
        assert!(!classifier.is_available());
        assert_eq!(
            classifier.classify("lubię słuchać muzyki").await,
            ClassificationOutcome::Indeterminate
        );
    }
}
