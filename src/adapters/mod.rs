//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Zero-shot classification and text preparation (Hugging Face, mocks)

pub mod ai;
