use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use common::{AssetRef, InsightRequest, MarketSnapshot, Recommendation};

use super::{require_symbol, timeframe_or_default};
use crate::{ApiError, AppState};

const DEFAULT_EXCHANGE: &str = "binance";

pub fn ai_router() -> Router<AppState> {
    Router::new().route("/api/ai/summary", post(ai_summary))
}

#[derive(Debug, Default, Deserialize)]
struct SummaryRequest {
    symbol: Option<String>,
    timeframe: Option<String>,
    exchange: Option<String>,
    /// A previously generated recommendation; forwarded only together with `market`.
    signal: Option<Recommendation>,
    market: Option<MarketSnapshot>,
}

/// Commentary for a signal. Uses the supplied signal and snapshot when both
/// are present, otherwise computes fresh ones first.
///
/// The provider's `confidence` and the policy's `signal_confidence` are
/// reported side by side and never combined.
async fn ai_summary(
    State(state): State<AppState>,
    // a malformed body counts as empty, like a missing one
    payload: Option<Json<SummaryRequest>>,
) -> Result<Json<Value>, ApiError> {
    let req = payload.map(|Json(p)| p).unwrap_or_default();
    let symbol = require_symbol(req.symbol.as_deref())?;

    let (signal, market) = match (req.signal, req.market) {
        (Some(signal), Some(market)) => (signal, market),
        _ => {
            let timeframe = timeframe_or_default(req.timeframe.as_deref());
            let market =
                strategy::fetch_snapshot(state.candles.as_ref(), symbol, timeframe).await?;
            (strategy::decide_with(&market, &state.policy), market)
        }
    };

    let request = InsightRequest {
        signal,
        asset: AssetRef {
            symbol: strategy::normalize_symbol(symbol),
            exchange: req.exchange.unwrap_or_else(|| DEFAULT_EXCHANGE.to_string()),
        },
        market,
    };
    let insight = state.insight.generate(&request).await?;

    Ok(Json(json!({
        "provider": state.insight.name(),
        "summary": insight.summary,
        "recommendation": insight.recommendation,
        "confidence": insight.confidence,
        "risks": insight.risks,
        "signal_confidence": request.signal.confidence,
        "signal": request.signal,
        "market": request.market,
    })))
}
