use async_trait::async_trait;

use crate::Result;

/// Abstraction over the market data provider.
///
/// `BinanceClient` in `crates/market` implements this for live data. The
/// snapshot builder only ever sees this trait, so tests can feed fixed series.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Close prices of the most recent `limit` candles for `symbol`,
    /// oldest first. `symbol` is in normalized `BASE/QUOTE` form.
    async fn closes(&self, symbol: &str, timeframe: &str, limit: usize) -> Result<Vec<f64>>;
}
