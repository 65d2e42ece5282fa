//! Stock Adviser web UI
//!
//! Serves the analysis form on a local address and forwards each submission
//! to a locally hosted Ollama server.
//!
//! # Usage
//!
//! ```bash
//! # Optional overrides
//! export OLLAMA_API_BASE="http://localhost:11434"
//! export STOCK_ADVISER_MODEL="stock_adviser"
//! export STOCK_ADVISER_ADDR="127.0.0.1:7860"
//!
//! # Run the server
//! cargo run --bin stock-adviser -p adviser-web
//! ```

mod server;

use adviser_llm::{OllamaConfig, OllamaProvider};
use server::AppState;
use std::env;
use std::sync::Arc;

fn get_provider_config() -> (OllamaConfig, String, String) {
    let api_base = env::var("OLLAMA_API_BASE").unwrap_or_else(|_| {
        eprintln!("Warning: OLLAMA_API_BASE not set, using default");
        "http://localhost:11434".to_string()
    });

    let model = env::var("STOCK_ADVISER_MODEL").unwrap_or_else(|_| {
        eprintln!("Warning: STOCK_ADVISER_MODEL not set, using default");
        "stock_adviser".to_string()
    });

    let addr = env::var("STOCK_ADVISER_ADDR").unwrap_or_else(|_| "127.0.0.1:7860".to_string());

    let config = OllamaConfig::new().with_api_base(api_base);

    (config, model, addr)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,adviser_web=info".to_string()),
        )
        .init();

    // Get inference provider configuration
    let (config, model, addr) = get_provider_config();

    println!("Configuration:");
    println!("  Inference endpoint: {}", config.api_base);
    println!("  Model: {model}");
    println!();

    // Create the Ollama provider
    let provider = Arc::new(OllamaProvider::with_config(config)?);

    let state = AppState { provider, model };
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Stock Adviser listening on http://{addr}");

    // Serve until terminated
    axum::serve(listener, app).await?;

    Ok(())
}
