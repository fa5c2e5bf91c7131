//! Ultimate Oscillator.
//!
//! Buying pressure `BP = Close - min(Low, PrevClose)` is compared with the
//! true range over three windows; the shortest window weighs 4, the middle
//! one 2 and the longest 1.

use crate::utils::{nan_series, ratio_or_zero};

/// Lookback of [`ultosc`].
pub fn ultosc_lookback(periods: [usize; 3]) -> usize {
    periods.into_iter().max().unwrap_or(0)
}

/// Ultimate Oscillator, in percent.
pub fn ultosc(high: &[f64], low: &[f64], close: &[f64], periods: [usize; 3]) -> Vec<f64> {
    let len = close.len();
    let mut result = nan_series(len);
    let start = ultosc_lookback(periods);
    if len <= start {
        return result;
    }

    let mut pressure = vec![0.0; len];
    let mut range = vec![0.0; len];
    for i in 1..len {
        let floor = low[i].min(close[i - 1]);
        pressure[i] = close[i] - floor;
        range[i] = high[i].max(close[i - 1]) - floor;
    }

    let mut sorted = periods;
    sorted.sort_unstable();
    let weights = [4.0, 2.0, 1.0];

    for i in start..len {
        let mut total = 0.0;
        for (period, weight) in sorted.iter().zip(weights) {
            let window = i + 1 - period..=i;
            let bp: f64 = pressure[window.clone()].iter().sum();
            let tr: f64 = range[window].iter().sum();
            total += weight * ratio_or_zero(bp, tr);
        }
        result[i] = 100.0 * total / 7.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closing_at_high_is_100() {
        let close: Vec<f64> = (0..12).map(|i| 10.0 + i as f64).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let result = ultosc(&close, &low, &close, [2, 3, 4]);
        assert!(result[3].is_nan());
        for value in &result[4..] {
            assert_relative_eq!(*value, 100.0);
        }
    }

    #[test]
    fn test_period_order_is_irrelevant() {
        let close: Vec<f64> = (0..30).map(|i| 10.0 + (i as f64).sin()).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
        let a = ultosc(&high, &low, &close, [7, 3, 5]);
        let b = ultosc(&high, &low, &close, [3, 5, 7]);
        assert_eq!(a[7..], b[7..]);
    }
}
