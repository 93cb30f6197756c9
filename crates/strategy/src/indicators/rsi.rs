/// Default RSI lookback.
pub const RSI_PERIOD: usize = 14;

/// Neutral reading returned when there is not enough history.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Relative Strength Index over the most recent `period` price changes.
///
/// Uses simple averages of gains and losses across the window (no Wilder
/// smoothing). Returns [`NEUTRAL_RSI`] if fewer than `period + 1` values are
/// available, and 100.0 when the average loss over the window is zero.
pub fn rsi(values: &[f64], period: usize) -> f64 {
    if values.len() < period + 1 {
        return NEUTRAL_RSI;
    }

    let window = &values[values.len() - (period + 1)..];
    let (gain_sum, loss_sum) = window
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(gains, losses), change| {
            if change >= 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses + change.abs())
            }
        });

    if period == 0 {
        return 100.0;
    }

    let avg_gain = gain_sum / period as f64;
    // a subnormal loss sum can still underflow to zero here
    let avg_loss = loss_sum / period as f64;
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
