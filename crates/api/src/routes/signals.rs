use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use common::{MarketSnapshot, Recommendation};

use super::{require_symbol, timeframe_or_default, SymbolRequest};
use crate::{ApiError, AppState};

pub fn signals_router() -> Router<AppState> {
    Router::new().route("/api/signals/auto", post(create_auto_signal))
}

/// A recommendation stamped with the pair and generation time.
#[derive(Debug, Serialize)]
struct SignalRecord {
    symbol: String,
    #[serde(flatten)]
    recommendation: Recommendation,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct AutoSignalResponse {
    signal: SignalRecord,
    market: MarketSnapshot,
}

async fn create_auto_signal(
    State(state): State<AppState>,
    payload: Option<Json<SymbolRequest>>,
) -> Result<(StatusCode, Json<AutoSignalResponse>), ApiError> {
    let req = payload.map(|Json(p)| p).unwrap_or_default();
    let symbol = require_symbol(req.symbol.as_deref())?;
    let timeframe = timeframe_or_default(req.timeframe.as_deref());

    let market = strategy::fetch_snapshot(state.candles.as_ref(), symbol, timeframe).await?;
    let recommendation = strategy::decide_with(&market, &state.policy);

    info!(
        symbol = %market.symbol,
        side = %recommendation.side,
        confidence = recommendation.confidence,
        actionable = recommendation.is_actionable(),
        "Auto signal generated"
    );

    let signal = SignalRecord {
        symbol: market.symbol.clone(),
        recommendation,
        created_at: Utc::now(),
    };
    Ok((StatusCode::CREATED, Json(AutoSignalResponse { signal, market })))
}
