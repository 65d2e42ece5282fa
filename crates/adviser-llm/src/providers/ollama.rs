//! Ollama provider implementation
//!
//! This module implements the InferenceProvider trait against a locally
//! hosted Ollama server's generate endpoint.
//! See: https://github.com/ollama/ollama/blob/main/docs/api.md
//!
//! # Examples
//!
//! ```no_run
//! use adviser_llm::{GenerateRequest, InferenceProvider};
//! use adviser_llm::providers::OllamaProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create provider against the default local server
//!     let provider = OllamaProvider::new()?;
//!
//!     let request = GenerateRequest::new("stock_adviser", "Analyze AAPL at 175.50.");
//!
//!     // Blocks until the streamed response completes
//!     let analysis = provider.generate(request).await?;
//!     println!("{analysis}");
//!
//!     Ok(())
//! }
//! ```

use crate::stream::collect_text;
use crate::{GenerateRequest, InferenceError, InferenceProvider, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

const DEFAULT_OLLAMA_API_BASE: &str = "http://localhost:11434";

/// Configuration for the Ollama provider
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server (default: "http://localhost:11434")
    pub api_base: String,
}

impl OllamaConfig {
    /// Create a config pointing at the default local server
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_OLLAMA_API_BASE.to_string(),
        }
    }

    /// Create config from environment
    ///
    /// Reads the base URL from `OLLAMA_API_BASE` if set.
    pub fn from_env() -> Self {
        let api_base = std::env::var("OLLAMA_API_BASE")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_API_BASE.to_string());

        Self { api_base }
    }

    /// Set a custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ollama provider
///
/// Submits one generate request at a time and consumes the streamed
/// response to completion. No request timeout is set: generation time is
/// unbounded and a stalled connection blocks the caller. No retry is
/// attempted.
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

impl OllamaProvider {
    /// Create a new Ollama provider with custom configuration
    pub fn with_config(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Create a provider against the default local server
    pub fn new() -> Result<Self> {
        Self::with_config(OllamaConfig::new())
    }

    /// Create a provider from environment variables
    ///
    /// Reads the base URL from `OLLAMA_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(OllamaConfig::from_env())
    }

    /// Get the current configuration
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        debug!("Sending generate request to {}", self.config.api_base);

        // Send request
        let response = self
            .client
            .post(format!("{}/api/generate", self.config.api_base))
            .json(&request)
            .send()
            .await?;

        // Handle errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(InferenceError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        // Accumulate the newline-delimited fragments into the final text
        let text = collect_text(response.bytes_stream()).await?;

        debug!("Received {} characters of generated text", text.len());

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OllamaProvider::new();
        assert!(provider.is_ok());
        let provider = provider.unwrap();
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.config().api_base, "http://localhost:11434");
    }

    #[test]
    fn test_provider_with_custom_config() {
        let config = OllamaConfig::new().with_api_base("http://127.0.0.1:8080");

        let provider = OllamaProvider::with_config(config).unwrap();
        assert_eq!(provider.config().api_base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_config_from_env() {
        unsafe {
            std::env::remove_var("OLLAMA_API_BASE");
        }
        let config = OllamaConfig::from_env();
        assert_eq!(config.api_base, DEFAULT_OLLAMA_API_BASE);

        unsafe {
            std::env::set_var("OLLAMA_API_BASE", "http://ollama.local:11434");
        }
        let config = OllamaConfig::from_env();
        assert_eq!(config.api_base, "http://ollama.local:11434");

        unsafe {
            std::env::remove_var("OLLAMA_API_BASE");
        }
    }
}
