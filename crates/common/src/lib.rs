pub mod config;
pub mod error;
pub mod insight;
pub mod source;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use insight::InsightProvider;
pub use source::CandleSource;
pub use types::*;
