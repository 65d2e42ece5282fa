//! Request type for a single analysis

use serde::{Deserialize, Serialize};

/// Manually entered stock metrics and technical indicators for one analysis.
///
/// Constructed fresh per invocation from user input. Values are taken as-is:
/// negative prices or an out-of-range RSI are passed through to the model
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Stock ticker symbol (e.g., "AAPL")
    pub ticker: String,

    /// Closing price
    pub close_price: f64,

    /// Trading volume
    pub volume: u64,

    /// 20-day simple moving average
    pub sma_20: f64,

    /// 50-day simple moving average
    pub sma_50: f64,

    /// 14-day relative strength index
    pub rsi: f64,

    /// MACD value
    pub macd: f64,

    /// MACD signal line
    pub signal_line: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_form_body() {
        let request: AnalysisRequest = serde_json::from_value(json!({
            "ticker": "AAPL",
            "close_price": 175.50,
            "volume": 82345678u64,
            "sma_20": 173.25,
            "sma_50": 170.80,
            "rsi": 65.4,
            "macd": 0.75,
            "signal_line": 0.50,
        }))
        .unwrap();

        assert_eq!(request.ticker, "AAPL");
        assert_eq!(request.volume, 82345678);
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        // No validation is performed on the inputs
        let request: AnalysisRequest = serde_json::from_value(json!({
            "ticker": "XYZ",
            "close_price": -1.0,
            "volume": 0,
            "sma_20": 0.0,
            "sma_50": 0.0,
            "rsi": 250.0,
            "macd": 0.0,
            "signal_line": 0.0,
        }))
        .unwrap();

        assert_eq!(request.close_price, -1.0);
        assert_eq!(request.rsi, 250.0);
    }
}
