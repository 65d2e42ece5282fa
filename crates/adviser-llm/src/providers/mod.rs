//! Concrete provider implementations

pub mod ollama;

pub use ollama::{OllamaConfig, OllamaProvider};
