//! Streaming inference client for the stock adviser
//!
//! This crate provides everything needed to talk to a locally hosted
//! language-model inference server. It includes:
//!
//! - Wire types for the generate endpoint
//! - A lazy stream of decoded response fragments, and the fold that
//!   assembles them into the final response text
//! - The provider trait for inference backends
//! - The concrete Ollama implementation

pub mod error;
pub mod generate;
pub mod provider;
pub mod providers;
pub mod stream;

// Re-export main types
pub use error::{InferenceError, Result};
pub use generate::{GenerateChunk, GenerateRequest};
pub use provider::InferenceProvider;
pub use providers::{OllamaConfig, OllamaProvider};
pub use stream::{collect_text, fragments};
