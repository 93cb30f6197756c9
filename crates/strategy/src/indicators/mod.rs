//! Stateless numeric primitives over close-price series (oldest first).
//!
//! None of these functions fail. Short or degenerate input resolves to a
//! documented neutral value instead.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod volatility;

pub use ema::ema;
pub use macd::{MacdIndicator, MacdReading};
pub use rsi::{rsi, RSI_PERIOD};
pub use volatility::volatility;
