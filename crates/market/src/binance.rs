use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use common::{CandleSource, Error, Result};

/// Index of the close price inside a Binance kline array.
const KLINE_CLOSE_INDEX: usize = 4;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Public market-data client for Binance spot. Only unauthenticated
/// endpoints are used, so no API key is needed.
pub struct BinanceClient {
    base_url: String,
    http: Client,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Binance spells pairs without a separator: "BTC/USDT" → "BTCUSDT".
    pub fn exchange_symbol(symbol: &str) -> String {
        symbol.replace('/', "").to_uppercase()
    }
}

#[async_trait]
impl CandleSource for BinanceClient {
    async fn closes(&self, symbol: &str, timeframe: &str, limit: usize) -> Result<Vec<f64>> {
        let pair = Self::exchange_symbol(symbol);
        let limit = limit.to_string();
        let url = format!("{}/api/v3/klines", self.base_url);

        debug!(pair = %pair, interval = %timeframe, limit = %limit, "Requesting klines");
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("symbol", pair.as_str()),
                ("interval", timeframe),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(pair = %pair, status = %status, "Kline request rejected");
            return Err(Error::Exchange(format!("HTTP {status}: {body}")));
        }
        parse_closes(&body)
    }
}

// ─── Kline JSON parsing ──────────────────────────────────────────────────────

/// Extract close prices from a `/api/v3/klines` response body.
///
/// Each kline is an array; the close sits at index 4 as a decimal string.
fn parse_closes(body: &str) -> Result<Vec<f64>> {
    let klines: Vec<Vec<Value>> =
        serde_json::from_str(body).map_err(|e| Error::Exchange(e.to_string()))?;

    klines
        .iter()
        .enumerate()
        .map(|(i, kline)| {
            kline
                .get(KLINE_CLOSE_INDEX)
                .and_then(close_value)
                .ok_or_else(|| Error::Exchange(format!("malformed kline at index {i}")))
        })
        .collect()
}

fn close_value(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        other => other.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KLINES: &str = r#"[
        [1499040000000, "0.01634790", "0.80000000", "0.01575800", "0.01577100", "148976.11427815",
         1499644799999, "2434.19055334", 308, "1756.87402397", "28.46694368", "0"],
        [1499040300000, "0.01577100", "0.01600000", "0.01570000", "0.01590000", "1000.0",
         1499040599999, "15.9", 12, "500.0", "7.95", "0"]
    ]"#;

    #[test]
    fn parses_closes_in_order() {
        let closes = parse_closes(KLINES).unwrap();
        assert_eq!(closes, vec![0.015771, 0.0159]);
    }

    #[test]
    fn empty_array_is_empty_series() {
        assert!(parse_closes("[]").unwrap().is_empty());
    }

    #[test]
    fn short_kline_is_rejected() {
        let err = parse_closes(r#"[[1499040000000, "1.0", "1.0"]]"#).unwrap_err();
        assert!(err.to_string().contains("malformed kline at index 0"));
    }

    #[test]
    fn non_numeric_close_is_rejected() {
        let err = parse_closes(r#"[[0, "1", "1", "1", "abc", "1"]]"#).unwrap_err();
        assert!(matches!(err, Error::Exchange(_)));
    }

    #[test]
    fn error_payload_is_rejected() {
        let err = parse_closes(r#"{"code": -1121, "msg": "Invalid symbol."}"#).unwrap_err();
        assert!(matches!(err, Error::Exchange(_)));
    }

    #[test]
    fn exchange_symbol_strips_separator() {
        assert_eq!(BinanceClient::exchange_symbol("BTC/USDT"), "BTCUSDT");
        assert_eq!(BinanceClient::exchange_symbol("eth/btc"), "ETHBTC");
        assert_eq!(BinanceClient::exchange_symbol("BNBUSDT"), "BNBUSDT");
    }
}
