//! Williams %R.
//!
//! # Formula
//!
//! ```text
//! %R = -100 * (Highest High - Close) / (Highest High - Lowest Low)
//! ```
//!
//! Ranges from -100 (close at the low) to 0 (close at the high); a window
//! without range reports 0.

use crate::utils::{nan_series, ratio_or_zero, rolling_max, rolling_min};

/// Lookback of [`willr`].
pub fn willr_lookback(period: usize) -> usize {
    period - 1
}

/// Williams %R over `period` bars.
pub fn willr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let highest = rolling_max(high, period);
    let lowest = rolling_min(low, period);
    let mut result = nan_series(close.len());
    for i in 0..close.len() {
        if !highest[i].is_nan() {
            result[i] = -100.0 * ratio_or_zero(highest[i] - close[i], highest[i] - lowest[i]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_willr() {
        let high = [10.0, 12.0, 11.0];
        let low = [8.0, 9.0, 7.0];
        let close = [9.0, 11.0, 10.0];
        let result = willr(&high, &low, &close, 3);
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], -40.0);
    }

    #[test]
    fn test_close_at_high() {
        let rising: Vec<f64> = (0..6).map(f64::from).collect();
        let result = willr(&rising, &rising, &rising, 3);
        assert!(result[2..].iter().all(|v| *v == 0.0));
    }
}
