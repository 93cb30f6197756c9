/// Exponential moving average over the whole series.
///
/// The output has the same length as `values`. It is seeded with the first
/// value, then each step is `price * k + prev * (1 - k)` with
/// `k = 2 / (period + 1)`. Empty input yields an empty vector.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let Some((&seed, rest)) = values.split_first() else {
        return Vec::new();
    };
    let k = smoothing(period);

    std::iter::once(seed)
        .chain(rest.iter().scan(seed, move |prev, &price| {
            *prev = price * k + *prev * (1.0 - k);
            Some(*prev)
        }))
        .collect()
}

fn smoothing(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_of_empty_is_empty() {
        assert!(ema(&[], 12).is_empty());
    }

    #[test]
    fn ema_of_single_value_is_that_value() {
        assert_eq!(ema(&[42.5], 26), vec![42.5]);
    }

    #[test]
    fn ema_follows_recurrence() {
        // period 3 → k = 0.5
        let out = ema(&[10.0, 20.0, 30.0], 3);
        assert_eq!(out, vec![10.0, 15.0, 22.5]);
    }

    #[test]
    fn ema_of_constant_series_is_constant() {
        let out = ema(&[7.0; 20], 9);
        assert!(out.iter().all(|&v| (v - 7.0).abs() < 1e-12));
    }

    #[test]
    fn ema_lags_a_rising_series() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let out = ema(&prices, 12);
        assert_eq!(out.len(), prices.len());
        assert!(out[29] < prices[29]);
        assert!(out[29] > out[28]);
    }
}
