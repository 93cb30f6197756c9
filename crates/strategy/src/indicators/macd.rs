use super::ema;

/// Default fast EMA period.
pub const FAST_PERIOD: usize = 12;
/// Default slow EMA period.
pub const SLOW_PERIOD: usize = 26;
/// Default signal-line EMA period.
pub const SIGNAL_PERIOD: usize = 9;

/// MACD (Moving Average Convergence/Divergence) indicator.
///
/// Computes: MACD line = EMA(fast) − EMA(slow), Signal = EMA(macd_line, signal_period).
/// Only the latest value of each line is reported.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdIndicator {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// Latest MACD and signal-line values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
}

impl Default for MacdIndicator {
    fn default() -> Self {
        Self::new(FAST_PERIOD, SLOW_PERIOD, SIGNAL_PERIOD)
    }
}

impl MacdIndicator {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(
            fast < slow,
            "MACD fast period must be less than slow period"
        );
        Self { fast, slow, signal }
    }

    /// MACD line over `closes` (oldest first).
    ///
    /// The fast EMA is aligned to the slow EMA from the tail before taking the
    /// pointwise difference.
    pub fn line(&self, closes: &[f64]) -> Vec<f64> {
        let fast = ema(closes, self.fast);
        let slow = ema(closes, self.slow);
        let offset = fast.len().saturating_sub(slow.len());

        fast[offset..]
            .iter()
            .zip(&slow)
            .map(|(f, s)| f - s)
            .collect()
    }

    /// Latest MACD and signal values. Both are 0.0 when `closes` is empty.
    pub fn compute(&self, closes: &[f64]) -> MacdReading {
        let line = self.line(closes);
        let signal_line = ema(&line, self.signal);

        match (line.last(), signal_line.last()) {
            (Some(&macd), Some(&signal)) => MacdReading { macd, signal },
            _ => MacdReading::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_up(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64 * 0.5).collect()
    }

    fn trending_down(n: usize) -> Vec<f64> {
        (0..n).map(|i| 200.0 - i as f64 * 0.5).collect()
    }

    #[test]
    fn empty_series_reads_zero() {
        let reading = MacdIndicator::default().compute(&[]);
        assert_eq!(reading, MacdReading { macd: 0.0, signal: 0.0 });
    }

    #[test]
    fn single_price_reads_zero() {
        let reading = MacdIndicator::default().compute(&[250.0]);
        assert_eq!(reading, MacdReading { macd: 0.0, signal: 0.0 });
    }

    #[test]
    fn line_has_input_length() {
        let prices = trending_up(60);
        assert_eq!(MacdIndicator::default().line(&prices).len(), 60);
    }

    #[test]
    fn macd_positive_and_above_signal_on_uptrend() {
        let reading = MacdIndicator::default().compute(&trending_up(100));
        assert!(reading.macd > 0.0);
        assert!(reading.macd > reading.signal);
    }

    #[test]
    fn macd_negative_and_below_signal_on_downtrend() {
        let reading = MacdIndicator::default().compute(&trending_down(100));
        assert!(reading.macd < 0.0);
        assert!(reading.macd < reading.signal);
    }

    #[test]
    fn flat_series_reads_zero() {
        let reading = MacdIndicator::default().compute(&[100.0; 50]);
        assert!(reading.macd.abs() < 1e-12);
        assert!(reading.signal.abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "fast period must be less than slow period")]
    fn rejects_inverted_periods() {
        MacdIndicator::new(26, 12, 9);
    }
}
