mod ai;
mod health;
mod market;
mod signals;

pub use ai::ai_router;
pub use health::health_router;
pub use market::market_router;
pub use signals::signals_router;

use serde::Deserialize;
use strategy::DEFAULT_TIMEFRAME;

use crate::ApiError;

/// Body shared by the snapshot and auto-signal endpoints.
///
/// Handlers take it as `Option<Json<_>>`: a missing body, a non-JSON content
/// type and malformed JSON all read as an empty request.
#[derive(Debug, Default, Deserialize)]
struct SymbolRequest {
    symbol: Option<String>,
    timeframe: Option<String>,
}

fn require_symbol(symbol: Option<&str>) -> Result<&str, ApiError> {
    symbol
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingField("symbol"))
}

fn timeframe_or_default(timeframe: Option<&str>) -> &str {
    timeframe
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TIMEFRAME)
}
