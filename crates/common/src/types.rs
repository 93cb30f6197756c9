use serde::{Deserialize, Serialize};

/// Price and derived indicators for one symbol/timeframe at one point in time.
///
/// Built fresh for every request and never mutated afterwards. This is the
/// only value handed from market data retrieval to the decision policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Normalized exchange pair, e.g. "BTC/USDT".
    pub symbol: String,
    /// Candle interval label, e.g. "5m".
    pub timeframe: String,
    /// Most recent close.
    pub last_price: f64,
    /// RSI in [0, 100]; 50.0 when the series is too short.
    pub rsi: f64,
    pub macd: f64,
    /// EMA-smoothed MACD.
    pub signal: f64,
    /// Population standard deviation of simple returns.
    pub volatility: f64,
}

/// Direction of a trade recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
            TradeSide::Hold => write!(f, "hold"),
        }
    }
}

/// Output of the signal decision policy.
///
/// `stop_loss` and `take_profit` are present only for buy/sell and are
/// omitted from the serialized form on hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub side: TradeSide,
    pub timeframe: String,
    /// Confidence in the indicator read, in [0.1, 1.0], rounded to 3 decimals.
    pub confidence: f64,
    /// Snapshot last price, rounded to 4 decimals.
    pub entry_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
}

impl Recommendation {
    /// True when the recommendation opens a position (buy or sell).
    pub fn is_actionable(&self) -> bool {
        self.side != TradeSide::Hold
    }
}

/// Instrument identity forwarded to the insight provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    pub symbol: String,
    pub exchange: String,
}

/// Everything the insight provider is allowed to see.
#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest {
    pub signal: Recommendation,
    pub asset: AssetRef,
    pub market: MarketSnapshot,
}

/// Free-text commentary returned by the insight provider.
///
/// `confidence` is the provider's own number and is unrelated to
/// `Recommendation::confidence`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub risks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hold_recommendation_omits_levels() {
        let rec = Recommendation {
            side: TradeSide::Hold,
            timeframe: "5m".into(),
            confidence: 0.1,
            entry_price: 10.0,
            stop_loss: None,
            take_profit: None,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            value,
            json!({"side": "hold", "timeframe": "5m", "confidence": 0.1, "entry_price": 10.0})
        );
        assert!(!rec.is_actionable());
    }

    #[test]
    fn buy_recommendation_carries_levels() {
        let rec = Recommendation {
            side: TradeSide::Buy,
            timeframe: "1h".into(),
            confidence: 0.3,
            entry_price: 100.0,
            stop_loss: Some(98.0),
            take_profit: Some(103.0),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["side"], "buy");
        assert_eq!(value["stop_loss"], 98.0);
        assert_eq!(value["take_profit"], 103.0);
        assert!(rec.is_actionable());
    }

    #[test]
    fn insight_fields_default_when_missing() {
        let insight: Insight = serde_json::from_value(json!({"summary": "flat"})).unwrap();
        assert_eq!(insight.summary, "flat");
        assert!(insight.recommendation.is_empty());
        assert_eq!(insight.confidence, 0.0);
        assert!(insight.risks.is_empty());
    }
}
