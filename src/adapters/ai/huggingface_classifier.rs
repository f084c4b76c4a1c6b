//! Hugging Face Classifier - Implementation of ZeroShotClassifier for the
//! Hugging Face Inference API.
//!
//! Sends `{ inputs, parameters: { candidate_labels, multi_label } }` to
//! `{base_url}/{model}` and accepts either a single
//! `{ labels: [...], scores: [...] }` object or a one-element array of it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::{
    ClassifierError, ClassifierInfo, LabelScore, ZeroShotClassifier, ZeroShotPrediction,
    ZeroShotRequest,
};

use super::huggingface_client::{HuggingFaceConfig, InferenceClient, InferenceFailure};

/// Hugging Face zero-shot classification adapter.
#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    client: InferenceClient,
}

impl HuggingFaceClassifier {
    /// Creates a classifier; fails only if the HTTP client cannot be built.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, ClassifierError> {
        let client = InferenceClient::new(config).map_err(|e| {
            ClassifierError::network(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }

    fn timeout_secs(&self) -> u64 {
        self.client.config().timeout.as_secs()
    }
}

#[async_trait]
impl ZeroShotClassifier for HuggingFaceClassifier {
    async fn classify(
        &self,
        request: ZeroShotRequest,
    ) -> Result<ZeroShotPrediction, ClassifierError> {
        let body = HfZeroShotRequest {
            inputs: &request.inputs,
            parameters: HfParameters {
                candidate_labels: &request.candidate_labels,
                multi_label: request.multi_label,
            },
        };

        debug!(
            model = %self.client.config().model,
            labels = request.candidate_labels.len(),
            "Sending zero-shot request"
        );

        let raw = self.client.post_json(&body).await.map_err(|failure| match failure {
            InferenceFailure::Timeout => ClassifierError::timeout(self.timeout_secs()),
            InferenceFailure::Network(message) => ClassifierError::Network(message),
            InferenceFailure::Status { status, body } => map_status(status, &body),
        })?;

        parse_prediction(&raw)
    }

    fn classifier_info(&self) -> ClassifierInfo {
        ClassifierInfo::new("huggingface", self.client.config().model.clone())
    }
}

/// Maps a non-2xx status to a classifier error.
fn map_status(status: u16, body: &str) -> ClassifierError {
    match status {
        401 | 403 => ClassifierError::AuthenticationFailed,
        429 => ClassifierError::RateLimited,
        500..=599 => ClassifierError::unavailable(format!("Server error {}: {}", status, body)),
        _ => ClassifierError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Parses a zero-shot response body.
fn parse_prediction(raw: &str) -> Result<ZeroShotPrediction, ClassifierError> {
    let body: HfZeroShotBody = serde_json::from_str(raw)
        .map_err(|e| ClassifierError::parse(format!("Failed to parse response: {}", e)))?;

    let response = match body {
        HfZeroShotBody::Single(response) => response,
        HfZeroShotBody::Batch(responses) => responses
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::parse("Empty response array"))?,
    };

    if response.labels.len() != response.scores.len() {
        return Err(ClassifierError::parse(format!(
            "{} labels but {} scores",
            response.labels.len(),
            response.scores.len()
        )));
    }

    let labels = response
        .labels
        .into_iter()
        .zip(response.scores)
        .map(|(label, score)| LabelScore::new(label, score))
        .collect();

    Ok(ZeroShotPrediction::new(labels))
}

// Hugging Face API types

#[derive(Debug, Serialize)]
struct HfZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters<'a>,
}

#[derive(Debug, Serialize)]
struct HfParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HfZeroShotBody {
    Single(HfZeroShotResponse),
    Batch(Vec<HfZeroShotResponse>),
}

#[derive(Debug, Deserialize)]
struct HfZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_inference_api_shape() {
        let labels = vec!["Visual learner".to_string(), "Auditory learner".to_string()];
        let body = HfZeroShotRequest {
            inputs: "lubię rysować",
            parameters: HfParameters {
                candidate_labels: &labels,
                multi_label: false,
            },
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "inputs": "lubię rysować",
                "parameters": {
                    "candidate_labels": ["Visual learner", "Auditory learner"],
                    "multi_label": false
                }
            })
        );
    }

    #[test]
    fn parses_single_object() {
        let raw = r#"{"sequence":"x","labels":["Auditory learner","Visual learner"],"scores":[0.8,0.2]}"#;
        let prediction = parse_prediction(raw).unwrap();
        let top = prediction.top().unwrap();
        assert_eq!(top.label, "Auditory learner");
        assert_eq!(top.score, 0.8);
    }

    #[test]
    fn parses_array_wrapped_object() {
        let raw = r#"[{"labels":["Kinesthetic learner","Visual learner"],"scores":[0.6,0.4]}]"#;
        let prediction = parse_prediction(raw).unwrap();
        assert_eq!(prediction.top().unwrap().label, "Kinesthetic learner");
    }

    #[test]
    fn ranks_unsorted_scores() {
        let raw = r#"{"labels":["Visual learner","Auditory learner"],"scores":[0.1,0.9]}"#;
        let prediction = parse_prediction(raw).unwrap();
        assert_eq!(prediction.top().unwrap().label, "Auditory learner");
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(matches!(parse_prediction("not json"), Err(ClassifierError::Parse(_))));
        assert!(matches!(parse_prediction("[]"), Err(ClassifierError::Parse(_))));
        assert!(matches!(
            parse_prediction(r#"{"error":"Model is loading"}"#),
            Err(ClassifierError::Parse(_))
        ));
        assert!(matches!(
            parse_prediction(r#"{"labels":["a","b"],"scores":[0.5]}"#),
            Err(ClassifierError::Parse(_))
        ));
    }

    #[test]
    fn empty_labels_parse_to_empty_prediction() {
        let prediction = parse_prediction(r#"{"labels":[],"scores":[]}"#).unwrap();
        assert!(prediction.is_empty());
    }

    #[test]
    fn status_mapping() {
        assert_eq!(map_status(401, ""), ClassifierError::AuthenticationFailed);
        assert_eq!(map_status(403, ""), ClassifierError::AuthenticationFailed);
        assert_eq!(map_status(429, ""), ClassifierError::RateLimited);
        assert!(matches!(map_status(503, "loading"), ClassifierError::Unavailable { .. }));
        assert!(matches!(map_status(404, ""), ClassifierError::Network(_)));
    }

    #[test]
    fn classifier_info_reports_model() {
        let classifier =
            HuggingFaceClassifier::new(HuggingFaceConfig::new("hf_test").with_model("org/nli"))
                .unwrap();
        let info = classifier.classifier_info();
        assert_eq!(info.name, "huggingface");
        assert_eq!(info.model, "org/nli");
    }
}
