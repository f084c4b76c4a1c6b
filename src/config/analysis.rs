//! Scoring pipeline configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::analysis::{
    AnalysisPolicy, FusionPolicy, KeywordScorer, TieBreakOrder, DEFAULT_FREE_TEXT_KEY,
    DEFAULT_MAX_OPEN_WEIGHT, DEFAULT_MIN_OPEN_WEIGHT, DEFAULT_MIN_TEXT_LENGTH,
    DEFAULT_NEGATION_WINDOW, DEFAULT_OPEN_TEXT_FACTOR,
};

use super::error::ValidationError;

/// Scoring pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Answer key holding the free-text description
    #[serde(default = "default_free_text_key")]
    pub free_text_key: String,

    /// Minimum normalized length of analysable free text
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Tokens inspected before a keyword for a negation cue
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,

    /// Open-text weight per closed answer
    #[serde(default = "default_open_text_factor")]
    pub open_text_factor: f64,

    #[serde(default = "default_min_open_weight")]
    pub min_open_weight: u32,

    #[serde(default = "default_max_open_weight")]
    pub max_open_weight: u32,

    /// Comma-separated priority order for tied scores
    #[serde(default = "default_tie_break")]
    pub tie_break: String,

    /// YAML lexicon replacing the bundled Polish one
    pub lexicon_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Parse the tie-break order
    pub fn tie_break_order(&self) -> Result<TieBreakOrder, ValidationError> {
        self.tie_break
            .parse()
            .map_err(|e: crate::domain::foundation::ValidationError| {
                ValidationError::InvalidTieBreak(e.to_string())
            })
    }

    /// Build the pipeline policy
    pub fn policy(&self) -> Result<AnalysisPolicy, ValidationError> {
        self.validate()?;
        Ok(AnalysisPolicy::default()
            .with_free_text_key(self.free_text_key.trim())
            .with_keyword_scorer(KeywordScorer {
                min_text_length: self.min_text_length,
                negation_window: self.negation_window,
            })
            .with_fusion(FusionPolicy {
                open_text_factor: self.open_text_factor,
                min_weight: self.min_open_weight,
                max_weight: self.max_open_weight,
            })
            .with_tie_break(self.tie_break_order()?))
    }

    /// Validate pipeline configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.free_text_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired(
                "LEARNSTYLE__ANALYSIS__FREE_TEXT_KEY",
            ));
        }

        if !self.open_text_factor.is_finite() || self.open_text_factor < 0.0 {
            return Err(ValidationError::InvalidOpenTextFactor(self.open_text_factor));
        }

        if self.min_open_weight > self.max_open_weight {
            return Err(ValidationError::InvalidWeightBounds {
                min: self.min_open_weight,
                max: self.max_open_weight,
            });
        }

        self.tie_break_order()?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            free_text_key: default_free_text_key(),
            min_text_length: default_min_text_length(),
            negation_window: default_negation_window(),
            open_text_factor: default_open_text_factor(),
            min_open_weight: default_min_open_weight(),
            max_open_weight: default_max_open_weight(),
            tie_break: default_tie_break(),
            lexicon_path: None,
        }
    }
}

fn default_free_text_key() -> String {
    DEFAULT_FREE_TEXT_KEY.to_string()
}

fn default_min_text_length() -> usize {
    DEFAULT_MIN_TEXT_LENGTH
}

fn default_negation_window() -> usize {
    DEFAULT_NEGATION_WINDOW
}

fn default_open_text_factor() -> f64 {
    DEFAULT_OPEN_TEXT_FACTOR
}

fn default_min_open_weight() -> u32 {
    DEFAULT_MIN_OPEN_WEIGHT
}

fn default_max_open_weight() -> u32 {
    DEFAULT_MAX_OPEN_WEIGHT
}

fn default_tie_break() -> String {
    TieBreakOrder::default().to_string()
}
