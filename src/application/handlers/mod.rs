//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod analyze_survey;

pub use analyze_survey::{AnalyzeSurveyCommand, AnalyzeSurveyHandler};
