//! Learnstyle - Learning-style inference engine
//!
//! Infers a learner's dominant sensory learning style (visual, auditory,
//! kinesthetic, or mixed) from closed survey answers and one free-text
//! self-description, combining keyword scoring with an optional zero-shot
//! classifier.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
