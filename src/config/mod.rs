//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEARNSTYLE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment loads a keyword-only setup.
//!
//! # Example
//!
//! ```no_run
//! use learnstyle::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("AI classifier configured: {}", config.ai.has_token());
//! ```

mod ai;
mod analysis;
mod error;
mod logging;

pub use ai::{AiConfig, TextPreparation, MAX_TIMEOUT_SECS};
pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// External classifier configuration (Hugging Face)
    #[serde(default)]
    pub ai: AiConfig,

    /// Scoring pipeline configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEARNSTYLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LEARNSTYLE__AI__API_TOKEN=hf_...` -> `ai.api_token = hf_...`
    /// - `LEARNSTYLE__ANALYSIS__TIE_BREAK=VISUAL,KINESTHETIC,AUDITORY`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEARNSTYLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
