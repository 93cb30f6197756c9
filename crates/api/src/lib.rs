mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use common::{CandleSource, InsightProvider, Result};
use strategy::PolicyParams;

pub use error::ApiError;

/// Shared application state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    pub candles: Arc<dyn CandleSource>,
    pub insight: Arc<dyn InsightProvider>,
    pub policy: Arc<PolicyParams>,
}

/// Build the full router with CORS applied.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .merge(routes::market_router())
        .merge(routes::signals_router())
        .merge(routes::ai_router())
        .merge(routes::health_router())
        .with_state(state)
        .layer(cors)
}

/// Bind and run the API server until the listener fails.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
