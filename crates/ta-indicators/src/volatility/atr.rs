//! True Range, Average True Range (ATR) and Normalized ATR.
//!
//! # Formula
//!
//! ```text
//! TR  = max(High, PrevClose) - min(Low, PrevClose)
//! ATR = (ATR[-1] * (n - 1) + TR) / n
//! ```
//!
//! The first ATR is the plain mean of the first `n` true ranges.

use crate::utils::{nan_series, ratio_or_zero, true_range};

/// Lookback of [`trange`].
pub fn trange_lookback() -> usize {
    1
}

/// True range of each bar after the first.
pub fn trange(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    true_range(high, low, close)
}

/// Lookback of [`atr`] and [`natr`].
pub fn atr_lookback(period: usize) -> usize {
    period.max(1)
}

/// Average True Range with Wilder smoothing.
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let tr = true_range(high, low, close);
    if period <= 1 {
        return tr;
    }

    let len = tr.len();
    let mut result = nan_series(len);
    if len <= period {
        return result;
    }

    let n = period as f64;
    let mut value = tr[1..=period].iter().sum::<f64>() / n;
    result[period] = value;
    for i in period + 1..len {
        value = (value * (n - 1.0) + tr[i]) / n;
        result[i] = value;
    }
    result
}

/// ATR as a percentage of the close. Zero when the close is zero.
pub fn natr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    atr(high, low, close, period)
        .iter()
        .zip(close)
        .map(|(atr, c)| if atr.is_nan() { f64::NAN } else { 100.0 * ratio_or_zero(*atr, *c) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atr_seed_and_smoothing() {
        let high = [10.0, 11.0, 12.0, 14.0];
        let low = [9.0, 10.0, 10.0, 12.0];
        let close = [10.0, 10.5, 11.0, 13.0];
        // TR: -, 1.0, 2.0, 3.0
        let result = atr(&high, &low, &close, 2);
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 1.5);
        assert_relative_eq!(result[3], (1.5 + 3.0) / 2.0);

        let normalized = natr(&high, &low, &close, 2);
        assert_relative_eq!(normalized[2], 100.0 * 1.5 / 11.0);
    }

    #[test]
    fn test_period_one_is_true_range() {
        let high = [10.0, 11.0];
        let low = [9.0, 10.0];
        let close = [10.0, 10.5];
        assert_eq!(atr(&high, &low, &close, 1)[1], 1.0);
        assert_eq!(atr_lookback(1), trange_lookback());
    }
}
