//! Mock Zero-Shot Classifier for testing.
//!
//! Provides a configurable mock implementation of the ZeroShotClassifier
//! port, allowing tests to run without calling the inference API.
//!
//! # Features
//!
//! - Pre-configured rankings (consumed in order)
//! - Simulated delays for timeout testing
//! - Error injection for degradation testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockZeroShotClassifier::new()
//!     .with_ranking(&[("Visual learner", 0.8), ("Auditory learner", 0.2)])
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    ClassifierError, ClassifierInfo, LabelScore, ZeroShotClassifier, ZeroShotPrediction,
    ZeroShotRequest,
};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockClassification {
    /// Return this ranking.
    Ranking(Vec<LabelScore>),
    /// Return an error.
    Error(ClassifierError),
}

/// Mock zero-shot classifier for testing.
#[derive(Debug, Clone)]
pub struct MockZeroShotClassifier {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockClassification>>>,
    info: ClassifierInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<ZeroShotRequest>>>,
}

impl Default for MockZeroShotClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockZeroShotClassifier {
    /// Creates a new mock classifier with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ClassifierInfo::new("mock", "mock-nli"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a ranking to the queue.
    pub fn with_ranking(self, labels: &[(&str, f64)]) -> Self {
        let ranking = labels
            .iter()
            .map(|(label, score)| LabelScore::new(*label, *score))
            .collect();
        self.push(MockClassification::Ranking(ranking));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: ClassifierError) -> Self {
        self.push(MockClassification::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ZeroShotRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: MockClassification) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Gets the next response, or an empty ranking.
    fn next_response(&self) -> MockClassification {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockClassification::Ranking(Vec::new()))
    }
}

#[async_trait]
impl ZeroShotClassifier for MockZeroShotClassifier {
    async fn classify(
        &self,
        request: ZeroShotRequest,
    ) -> Result<ZeroShotPrediction, ClassifierError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockClassification::Ranking(labels) => Ok(ZeroShotPrediction::new(labels)),
            MockClassification::Error(err) => Err(err),
        }
    }

    fn classifier_info(&self) -> ClassifierInfo {
        self.info.clone()
    }
}
