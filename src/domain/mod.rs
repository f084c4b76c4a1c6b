//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (styles, errors)
//! - `analysis` - Pure scoring pipeline (normalization, scorers, fusion, resolution)

pub mod analysis;
pub mod foundation;
