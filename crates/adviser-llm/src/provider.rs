//! Inference provider trait definition

use crate::{GenerateRequest, Result};
use async_trait::async_trait;

/// Trait for inference providers
///
/// Implementations submit a rendered prompt to an inference service and
/// return the fully assembled response text.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate the complete response text for a request
    ///
    /// # Arguments
    ///
    /// * `request` - The generate request with model, prompt, and streaming flag
    ///
    /// # Returns
    ///
    /// The accumulated response text once the stream completes
    async fn generate(&self, request: GenerateRequest) -> Result<String>;

    /// Get the provider name (e.g., "ollama")
    fn name(&self) -> &str;
}
