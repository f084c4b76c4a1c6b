//! Foundation module - Shared domain primitives.
//!
//! Contains the style vocabulary and error types that form the language of
//! the learning-style domain.

mod errors;
mod style;

pub use errors::ValidationError;
pub use style::{LearningStyle, Style};
