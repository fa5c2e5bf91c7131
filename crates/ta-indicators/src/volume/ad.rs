//! Chaikin Accumulation/Distribution line and oscillator.
//!
//! ```text
//! CLV = ((Close - Low) - (High - Close)) / (High - Low)
//! AD  = AD[-1] + CLV * Volume
//! ```

use crate::utils::{nan_series, ratio_or_zero};

/// Accumulation/Distribution line. Every bar is valid.
pub fn ad(high: &[f64], low: &[f64], close: &[f64], volume: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    (0..close.len())
        .map(|i| {
            let clv = ratio_or_zero((close[i] - low[i]) - (high[i] - close[i]), high[i] - low[i]);
            total += clv * volume[i];
            total
        })
        .collect()
}

/// Exponential average seeded with the first value rather than an SMA.
fn ema_from_first(data: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut value = match data.first() {
        Some(v) => *v,
        None => return Vec::new(),
    };
    data.iter()
        .map(|x| {
            value += alpha * (x - value);
            value
        })
        .collect()
}

/// Lookback of [`adosc`].
pub fn adosc_lookback(fast: usize, slow: usize) -> usize {
    fast.max(slow) - 1
}

/// Chaikin A/D Oscillator: fast EMA of the A/D line minus its slow EMA.
///
/// Both averages start at the first A/D value; output begins once the
/// longer one has seen a full period.
pub fn adosc(high: &[f64], low: &[f64], close: &[f64], volume: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let line = ad(high, low, close, volume);
    let fast_ema = ema_from_first(&line, fast);
    let slow_ema = ema_from_first(&line, slow);

    let mut result = nan_series(line.len());
    for i in adosc_lookback(fast, slow)..line.len() {
        result[i] = fast_ema[i] - slow_ema[i];
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ad() {
        let high = [12.0, 12.0, 10.0];
        let low = [8.0, 8.0, 10.0];
        let close = [11.0, 8.0, 10.0];
        let volume = [100.0, 40.0, 999.0];
        // CLV: 0.5, -1.0, flat bar 0.
        let result = ad(&high, &low, &close, &volume);
        assert_relative_eq!(result[0], 50.0);
        assert_relative_eq!(result[1], 10.0);
        assert_relative_eq!(result[2], 10.0);
    }

    #[test]
    fn test_adosc_flat_line_is_zero() {
        let flat = [10.0; 12];
        let result = adosc(&flat, &flat, &flat, &flat, 3, 10);
        assert!(result[8].is_nan());
        assert!(result[9..].iter().all(|v| *v == 0.0));
    }
}
