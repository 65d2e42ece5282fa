//! Request and response types for the generate endpoint

use serde::{Deserialize, Serialize};

/// Request body for a generate call
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier (server-side model name)
    pub model: String,

    /// Fully rendered prompt
    pub prompt: String,

    /// Streaming indicator. Always true: the client consumes the response
    /// as newline-delimited JSON fragments.
    pub stream: bool,
}

impl GenerateRequest {
    /// Create a streaming generate request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: true,
        }
    }
}

/// One decoded unit of a streamed response
///
/// The server emits one JSON object per line. `response` carries zero or one
/// text fragment; the final line sets `done`. Other fields (model name,
/// timings, context) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    /// Text fragment, when present
    #[serde(default)]
    pub response: Option<String>,

    /// Set on the final chunk of a completed generation
    #[serde(default)]
    pub done: bool,
}
