use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The candle source returned no candles for the pair.
    #[error("No market data returned for {symbol} ({timeframe})")]
    NoMarketData { symbol: String, timeframe: String },

    #[error("Exchange API error: {0}")]
    Exchange(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Insight provider error: {0}")]
    Insight(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures caused by an upstream collaborator (market data or
    /// AI provider) rather than by this process.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::NoMarketData { .. } | Error::Exchange(_) | Error::Http(_) | Error::Insight(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
