//! Prompt rendering
//!
//! The model was fine-tuned on Alpaca-style instruction/input/response
//! records, so the prompt keeps that exact frame around the stock data
//! block. Rendering is deterministic: identical input yields byte-identical
//! output.

use crate::AnalysisRequest;

const PREAMBLE: &str = "Below is an instruction that describes a task, paired with an input \
     that provides further context. Write a response that appropriately completes the request.";

const INSTRUCTION: &str =
    "Analyze the provided stock data and provide a trading recommendation with \
     detailed explanations.";

/// Render an integer with thousands separators (82345678 -> "82,345,678").
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render the stock data block embedded in the prompt.
///
/// The ticker is included verbatim; prices and indicators are rendered with
/// two decimals and the volume with thousands separators.
pub fn stock_summary(request: &AnalysisRequest) -> String {
    format!(
        "Stock: {ticker}\n\
         Close: {close:.2}\n\
         Volume: {volume}\n\
         \n\
         Technical Indicators:\n\
         - SMA (20-day): {sma_20:.2}\n\
         - SMA (50-day): {sma_50:.2}\n\
         - RSI (14-day): {rsi:.2}\n\
         - MACD: {macd:.2}\n\
         - MACD Signal Line: {signal:.2}",
        ticker = request.ticker,
        close = request.close_price,
        volume = format_volume(request.volume),
        sma_20 = request.sma_20,
        sma_50 = request.sma_50,
        rsi = request.rsi,
        macd = request.macd,
        signal = request.signal_line,
    )
}

/// Build the complete instruction prompt for an analysis request.
pub fn analysis_prompt(request: &AnalysisRequest) -> String {
    format!(
        "{PREAMBLE}\n\n### Instruction: {INSTRUCTION}\n\n### Input: {data}\n\n### Response:",
        data = stock_summary(request),
    )
}
