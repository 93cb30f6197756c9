use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use common::Config;
use insight::GeminiClient;
use market::BinanceClient;
use strategy::PolicyParams;

#[tokio::main]
async fn main() {
    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();

    // ── Logging ──────────────────────────────────────────────────────────────
    // RUST_LOG wins over LOG_LEVEL when both are set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(port = cfg.port, provider = %cfg.ai_provider, "Crypto Intel starting");

    // ── Signal policy ─────────────────────────────────────────────────────────
    let policy = match cfg.policy_config_path.as_deref() {
        Some(path) => {
            let params = PolicyParams::load(path)
                .unwrap_or_else(|e| panic!("Failed to load policy config: {e}"));
            info!(path, ?params, "Loaded policy overrides");
            params
        }
        None => PolicyParams::default(),
    };

    // ── Collaborators ─────────────────────────────────────────────────────────
    let candles = BinanceClient::new(&cfg.binance_base_url)
        .unwrap_or_else(|e| panic!("Failed to build market data client: {e}"));

    if !cfg.ai_provider.eq_ignore_ascii_case("gemini") {
        panic!("Unsupported AI_PROVIDER '{}'. Supported: gemini", cfg.ai_provider);
    }
    let insight = GeminiClient::new(&cfg.gemini_api_key, &cfg.gemini_model)
        .unwrap_or_else(|e| panic!("Failed to build insight client: {e}"));
    if !insight.is_configured() {
        warn!("GEMINI_API_KEY is not set; AI summaries will report the missing key");
    }

    // ── API ───────────────────────────────────────────────────────────────────
    let state = api::AppState {
        candles: Arc::new(candles),
        insight: Arc::new(insight),
        policy: Arc::new(policy),
    };

    tokio::select! {
        result = api::serve(state, cfg.port) => {
            if let Err(e) = result {
                error!(error = %e, "API server stopped");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting.");
        }
    }
}
