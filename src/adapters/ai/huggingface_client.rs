//! Hugging Face Inference API client shared by the classifier and the
//! translator adapters.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new(api_token)
//!     .with_model("facebook/bart-large-mnli")
//!     .with_timeout(Duration::from_secs(10));
//! ```

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

/// Default zero-shot model.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-mnli";

/// Default inference endpoint; the model id is appended as a path segment.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Hugging Face adapters.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication.
    api_token: Secret<String>,
    /// Model to call (e.g., "facebook/bart-large-mnli").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a new configuration with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Secret::new(api_token.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full endpoint URL for the configured model.
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }

    /// Exposes the API token (for making requests).
    fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

/// Transport outcome that each adapter maps onto its own error type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InferenceFailure {
    Timeout,
    Network(String),
    Status { status: u16, body: String },
}

/// Authenticated JSON client for one model endpoint.
#[derive(Debug, Clone)]
pub(crate) struct InferenceClient {
    config: HuggingFaceConfig,
    client: Client,
}

impl InferenceClient {
    pub(crate) fn new(config: HuggingFaceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub(crate) fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }

    /// Posts a JSON body and returns the raw response body on 2xx.
    ///
    /// The whole exchange, body included, is bounded by the configured
    /// timeout.
    pub(crate) async fn post_json<B>(&self, body: &B) -> Result<String, InferenceFailure>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .post(self.config.model_url())
            .bearer_auth(self.config.api_token())
            .json(body);

        let exchange = async {
            let response = request.send().await.map_err(map_reqwest_error)?;
            let status = response.status();
            let text = response.text().await.map_err(map_reqwest_error)?;
            if status.is_success() {
                Ok(text)
            } else {
                Err(InferenceFailure::Status {
                    status: status.as_u16(),
                    body: text,
                })
            }
        };

        match tokio::time::timeout(self.config.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(InferenceFailure::Timeout),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> InferenceFailure {
    if err.is_timeout() {
        InferenceFailure::Timeout
    } else if err.is_connect() {
        InferenceFailure::Network(format!("Connection failed: {}", err))
    } else {
        InferenceFailure::Network(err.to_string())
    }
}
