//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid classifier timeout: {0}s (expected 1..=120)")]
    InvalidTimeout(u64),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Minimum confidence must be within 0.0..=1.0, got {0}")]
    InvalidConfidence(f64),

    #[error("Classifier labels must be non-empty and distinct")]
    InvalidLabels,

    #[error("Open-text factor must be finite and non-negative, got {0}")]
    InvalidOpenTextFactor(f64),

    #[error("Open-text weight bounds are inverted: min {min} > max {max}")]
    InvalidWeightBounds { min: u32, max: u32 },

    #[error("Invalid tie-break order: {0}")]
    InvalidTieBreak(String),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
