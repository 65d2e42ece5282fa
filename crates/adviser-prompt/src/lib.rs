//! Prompt construction for the stock adviser
//!
//! This crate provides the request type for a single analysis and the pure
//! functions that render it into the natural-language instruction prompt
//! sent to the inference server. No state, no I/O.

pub mod prompt;
pub mod request;

// Re-export main types
pub use prompt::{analysis_prompt, format_volume, stock_summary};
pub use request::AnalysisRequest;
