use tracing::debug;

use common::{CandleSource, Error, MarketSnapshot, Result};

use crate::indicators::{rsi, volatility, MacdIndicator, RSI_PERIOD};

/// Number of recent candles requested from the candle source.
pub const CANDLE_LIMIT: usize = 100;

/// Timeframe used when a caller does not specify one.
pub const DEFAULT_TIMEFRAME: &str = "5m";

const QUOTE_USDT: &str = "USDT";

/// Normalize a user-supplied symbol into `BASE/QUOTE` form.
///
/// Symbols that already contain `/` pass through untouched. Otherwise the
/// symbol is uppercased and, if it ends in `USDT` with a non-empty base,
/// split before the quote: `"btcusdt"` → `"BTC/USDT"`.
pub fn normalize_symbol(symbol: &str) -> String {
    if symbol.contains('/') {
        return symbol.to_string();
    }
    let upper = symbol.to_uppercase();
    match upper.strip_suffix(QUOTE_USDT) {
        Some(base) if !base.is_empty() => format!("{base}/{QUOTE_USDT}"),
        _ => upper,
    }
}

/// Assemble a snapshot from close prices (oldest first).
///
/// Fails with [`Error::NoMarketData`] when `closes` is empty; every other
/// degenerate series resolves to the indicators' neutral values.
pub fn build_snapshot(symbol: &str, timeframe: &str, closes: &[f64]) -> Result<MarketSnapshot> {
    let symbol = normalize_symbol(symbol);
    let Some(&last_price) = closes.last() else {
        return Err(Error::NoMarketData {
            symbol,
            timeframe: timeframe.to_string(),
        });
    };

    let macd = MacdIndicator::default().compute(closes);

    Ok(MarketSnapshot {
        symbol,
        timeframe: timeframe.to_string(),
        last_price,
        rsi: rsi(closes, RSI_PERIOD),
        macd: macd.macd,
        signal: macd.signal,
        volatility: volatility(closes),
    })
}

/// Fetch the latest [`CANDLE_LIMIT`] closes for `symbol` and build a snapshot.
pub async fn fetch_snapshot(
    source: &dyn CandleSource,
    symbol: &str,
    timeframe: &str,
) -> Result<MarketSnapshot> {
    let symbol = normalize_symbol(symbol);
    let closes = source.closes(&symbol, timeframe, CANDLE_LIMIT).await?;
    debug!(symbol = %symbol, timeframe = %timeframe, candles = closes.len(), "Fetched closes");
    build_snapshot(&symbol, timeframe, &closes)
}
