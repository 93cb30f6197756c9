use axum::{extract::State, routing::post, Json, Router};

use common::MarketSnapshot;

use super::{require_symbol, timeframe_or_default, SymbolRequest};
use crate::{ApiError, AppState};

pub fn market_router() -> Router<AppState> {
    Router::new().route("/api/market/snapshot", post(market_snapshot))
}

async fn market_snapshot(
    State(state): State<AppState>,
    payload: Option<Json<SymbolRequest>>,
) -> Result<Json<MarketSnapshot>, ApiError> {
    let req = payload.map(|Json(p)| p).unwrap_or_default();
    let symbol = require_symbol(req.symbol.as_deref())?;
    let timeframe = timeframe_or_default(req.timeframe.as_deref());

    let snapshot = strategy::fetch_snapshot(state.candles.as_ref(), symbol, timeframe).await?;
    Ok(Json(snapshot))
}
