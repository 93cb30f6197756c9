use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use common::{AssetRef, Error, InsightProvider, InsightRequest, MarketSnapshot, Recommendation, TradeSide};
use insight::GeminiClient;

fn request() -> InsightRequest {
    InsightRequest {
        signal: Recommendation {
            side: TradeSide::Sell,
            timeframe: "15m".into(),
            confidence: 0.42,
            entry_price: 50.0,
            stop_loss: Some(50.5),
            take_profit: Some(49.25),
        },
        asset: AssetRef {
            symbol: "ETH/USDT".into(),
            exchange: "binance".into(),
        },
        market: MarketSnapshot {
            symbol: "ETH/USDT".into(),
            timeframe: "15m".into(),
            last_price: 50.0,
            rsi: 61.0,
            macd: -1.1,
            signal: -0.4,
            volatility: 0.002,
        },
    }
}

/// Fake `generateContent` endpoint. The model name selects the behaviour.
async fn spawn_fake_gemini() -> String {
    async fn generate(
        Path(model): Path<String>,
        Query(q): Query<std::collections::HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        if q.get("key").map(String::as_str) != Some("test-key") {
            return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
        }
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
        if !prompt.contains("ETH/USDT") {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing asset"})));
        }

        let text = match model.as_str() {
            "fenced:generateContent" => {
                "```json\n{\"summary\": \"Bearish crossover\", \"recommendation\": \"Reduce\", \"confidence\": 0.7, \"risks\": [\"news\"]}\n```"
            }
            "prose:generateContent" => "Momentum is fading.",
            _ => return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))),
        };
        (
            StatusCode::OK,
            Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})),
        )
    }

    let app = Router::new().route("/v1beta/models/:model", post(generate));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fenced_json_reply_is_parsed() {
    let client = GeminiClient::new("test-key", "fenced")
        .unwrap()
        .with_base_url(spawn_fake_gemini().await);
    let insight = client.generate(&request()).await.unwrap();
    assert_eq!(insight.summary, "Bearish crossover");
    assert_eq!(insight.recommendation, "Reduce");
    assert_eq!(insight.confidence, 0.7);
    assert_eq!(insight.risks, vec!["news".to_string()]);
}

#[tokio::test]
async fn prose_reply_falls_back_to_summary() {
    let client = GeminiClient::new("test-key", "prose")
        .unwrap()
        .with_base_url(spawn_fake_gemini().await);
    let insight = client.generate(&request()).await.unwrap();
    assert_eq!(insight.summary, "Momentum is fading.");
    assert_eq!(insight.risks, vec!["Model did not return JSON".to_string()]);
}

#[tokio::test]
async fn server_error_is_insight_error() {
    let client = GeminiClient::new("test-key", "broken")
        .unwrap()
        .with_base_url(spawn_fake_gemini().await);
    let err = client.generate(&request()).await.unwrap_err();
    assert!(matches!(err, Error::Insight(_)));
}

#[tokio::test]
async fn missing_key_skips_the_network() {
    // Unroutable base URL: the call must not be attempted at all.
    let client = GeminiClient::new("", "fenced")
        .unwrap()
        .with_base_url("http://127.0.0.1:1");
    let insight = client.generate(&request()).await.unwrap();
    assert_eq!(insight.summary, "Missing GEMINI_API_KEY.");
    assert_eq!(insight.recommendation, "Set GEMINI_API_KEY in .env.");
    assert_eq!(insight.confidence, 0.0);
    assert_eq!(insight.risks, vec!["AI provider not configured".to_string()]);
}
