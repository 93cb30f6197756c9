use serde::{Deserialize, Serialize};

use common::{Error, Result};

/// Default RSI ceiling for a buy.
pub const BUY_RSI_BELOW: f64 = 45.0;
/// Default RSI floor for a sell.
pub const SELL_RSI_ABOVE: f64 = 55.0;
/// Minimum volatility used for stop/target bands.
pub const VOLATILITY_FLOOR: f64 = 0.005;
/// Default stop-loss distance in volatility units.
pub const STOP_LOSS_MULTIPLE: f64 = 2.0;
/// Default take-profit distance in volatility units.
pub const TAKE_PROFIT_MULTIPLE: f64 = 3.0;

/// Thresholds of the signal decision policy.
///
/// `Default` yields the documented constants above. Changing any default is
/// a behavioural break for callers that pin exact outputs.
///
/// Example `config/policy.toml` (every key optional):
/// ```toml
/// buy_rsi_below = 40.0
/// sell_rsi_above = 60.0
/// volatility_floor = 0.005
/// stop_loss_multiple = 2.0
/// take_profit_multiple = 3.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyParams {
    pub buy_rsi_below: f64,
    pub sell_rsi_above: f64,
    pub volatility_floor: f64,
    pub stop_loss_multiple: f64,
    pub take_profit_multiple: f64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            buy_rsi_below: BUY_RSI_BELOW,
            sell_rsi_above: SELL_RSI_ABOVE,
            volatility_floor: VOLATILITY_FLOOR,
            stop_loss_multiple: STOP_LOSS_MULTIPLE,
            take_profit_multiple: TAKE_PROFIT_MULTIPLE,
        }
    }
}

impl PolicyParams {
    /// Load from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("policy config at '{path}': {e}")))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: PolicyParams =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        let bounds = [
            ("buy_rsi_below", self.buy_rsi_below),
            ("sell_rsi_above", self.sell_rsi_above),
        ];
        for (key, value) in bounds {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::Config(format!("{key} must be within [0, 100], got {value}")));
            }
        }

        let non_negative = [
            ("volatility_floor", self.volatility_floor),
            ("stop_loss_multiple", self.stop_loss_multiple),
            ("take_profit_multiple", self.take_profit_multiple),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("{key} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}
