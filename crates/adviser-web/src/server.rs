//! HTTP routes for the analysis form

use adviser_llm::{GenerateRequest, InferenceProvider};
use adviser_prompt::{AnalysisRequest, analysis_prompt};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Inference backend
    pub provider: Arc<dyn InferenceProvider>,

    /// Model identifier sent with every generate call
    pub model: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/analyze", post(analyze))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Response body for an analysis call
#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    analysis: String,
}

/// Run one analysis: format the prompt, await the streamed completion.
///
/// Always responds 200 with a text body. A failed inference call is
/// reported through the same channel as a successful analysis, so the
/// handler itself is infallible.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<AnalyzeResponse> {
    info!("Analyzing {}", request.ticker);

    let prompt = analysis_prompt(&request);
    let generate = GenerateRequest::new(state.model.clone(), prompt);

    let analysis = match state.provider.generate(generate).await {
        Ok(text) => text,
        Err(e) => {
            debug!("Inference call failed: {e}");
            format!("Error generating analysis: {e}")
        }
    };

    Json(AnalyzeResponse { analysis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adviser_llm::{InferenceError, Result};
    use async_trait::async_trait;

    struct StubProvider {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl InferenceProvider for StubProvider {
        async fn generate(&self, request: GenerateRequest) -> Result<String> {
            assert!(request.stream);
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(InferenceError::RequestFailed(
                    "HTTP 500 Internal Server Error: model not loaded".to_string(),
                )),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn state(reply: Option<&'static str>) -> AppState {
        AppState {
            provider: Arc::new(StubProvider { reply }),
            model: "stock_adviser".to_string(),
        }
    }

    fn msft() -> AnalysisRequest {
        AnalysisRequest {
            ticker: "MSFT".to_string(),
            close_price: 325.75,
            volume: 45678901,
            sma_20: 320.50,
            sma_50: 315.20,
            rsi: 58.7,
            macd: 1.20,
            signal_line: 0.90,
        }
    }

    #[tokio::test]
    async fn test_analyze_returns_generated_text() {
        let Json(response) = analyze(State(state(Some("Hold MSFT."))), Json(msft())).await;
        assert_eq!(response.analysis, "Hold MSFT.");
    }

    #[tokio::test]
    async fn test_analyze_absorbs_inference_errors() {
        // Transport and payload failures surface as text in the output
        // channel, never as an error response
        let Json(response) = analyze(State(state(None)), Json(msft())).await;
        assert!(response.analysis.starts_with("Error generating analysis:"));
        assert!(response.analysis.contains("model not loaded"));
    }

    #[test]
    fn test_index_page_has_form_and_examples() {
        assert!(INDEX_HTML.contains("Stock Ticker"));
        assert!(INDEX_HTML.contains("MACD Signal Line"));
        assert!(INDEX_HTML.contains("Analyze Stock"));
        // The three illustrative example rows
        assert!(INDEX_HTML.contains("AAPL"));
        assert!(INDEX_HTML.contains("MSFT"));
        assert!(INDEX_HTML.contains("GOOGL"));
    }
}
