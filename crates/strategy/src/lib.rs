//! Indicator pipeline and signal decision policy.
//!
//! Data flows one way: close prices → [`indicators`] → [`MarketSnapshot`]
//! ([`snapshot`]) → [`Recommendation`] ([`policy`]). Both the snapshot
//! builder and the policy are pure apart from the candle fetch.

pub mod config;
pub mod indicators;
pub mod policy;
pub mod snapshot;

pub use config::PolicyParams;
pub use policy::{decide, decide_with};
pub use snapshot::{build_snapshot, fetch_snapshot, normalize_symbol, CANDLE_LIMIT, DEFAULT_TIMEFRAME};

pub use common::{MarketSnapshot, Recommendation, TradeSide};
