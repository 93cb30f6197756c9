use tracing::debug;

use common::{MarketSnapshot, Recommendation, TradeSide};

use crate::config::PolicyParams;

/// Lower bound of the reported confidence.
pub const MIN_CONFIDENCE: f64 = 0.1;
/// Upper bound of the reported confidence.
pub const MAX_CONFIDENCE: f64 = 1.0;

const PRICE_DECIMALS: usize = 4;
const CONFIDENCE_DECIMALS: usize = 3;

/// Classify a snapshot into a trade recommendation using the default thresholds.
///
/// Pure and deterministic: the same snapshot always yields the same output.
pub fn decide(snapshot: &MarketSnapshot) -> Recommendation {
    decide_with(snapshot, &PolicyParams::default())
}

/// Classify a snapshot using explicit thresholds.
pub fn decide_with(snapshot: &MarketSnapshot, params: &PolicyParams) -> Recommendation {
    let side = select_side(snapshot, params);
    let entry = snapshot.last_price;
    let vol = snapshot.volatility.max(params.volatility_floor);

    let stop_distance = params.stop_loss_multiple * vol;
    let target_distance = params.take_profit_multiple * vol;

    let (stop_loss, take_profit) = match side {
        TradeSide::Buy => (
            Some(entry * (1.0 - stop_distance)),
            Some(entry * (1.0 + target_distance)),
        ),
        TradeSide::Sell => (
            Some(entry * (1.0 + stop_distance)),
            Some(entry * (1.0 - target_distance)),
        ),
        TradeSide::Hold => (None, None),
    };

    debug!(symbol = %snapshot.symbol, side = %side, rsi = snapshot.rsi, "Signal decided");

    Recommendation {
        side,
        timeframe: snapshot.timeframe.clone(),
        confidence: round_to(confidence(snapshot), CONFIDENCE_DECIMALS),
        entry_price: round_to(entry, PRICE_DECIMALS),
        stop_loss: stop_loss.map(|v| round_to(v, PRICE_DECIMALS)),
        take_profit: take_profit.map(|v| round_to(v, PRICE_DECIMALS)),
    }
}

/// First matching rule wins; anything else is a hold.
fn select_side(snapshot: &MarketSnapshot, params: &PolicyParams) -> TradeSide {
    if snapshot.rsi < params.buy_rsi_below && snapshot.macd > snapshot.signal {
        TradeSide::Buy
    } else if snapshot.rsi > params.sell_rsi_above && snapshot.macd < snapshot.signal {
        TradeSide::Sell
    } else {
        TradeSide::Hold
    }
}

/// Distance of RSI from neutral plus MACD magnitude, clamped to
/// [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`]. Not a calibrated probability.
fn confidence(snapshot: &MarketSnapshot) -> f64 {
    let raw = (snapshot.rsi - 50.0).abs() / 50.0 + snapshot.macd.abs() / 10.0;
    MAX_CONFIDENCE.min(MIN_CONFIDENCE.max(raw))
}

/// Rounds the exact decimal expansion of `value`, ties to even.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
