//! Error types for inference operations

use thiserror::Error;

/// Result type for inference operations
pub type Result<T> = std::result::Result<T, InferenceError>;

/// Errors that can occur while talking to the inference server
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Server returned a non-success HTTP status
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// HTTP transport error (connection refused, reset mid-stream, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed streamed payload
    #[error("Malformed stream payload: {0}")]
    Json(#[from] serde_json::Error),
}
