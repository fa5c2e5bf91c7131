//! Relative Strength Index (RSI) and Chande Momentum Oscillator (CMO).
//!
//! Both average gains and losses with Wilder's smoothing, seeded by the
//! plain mean of the first `period` bar-to-bar changes.
//!
//! # Formula
//!
//! ```text
//! RSI = 100 * AvgGain / (AvgGain + AvgLoss)
//! CMO = 100 * (AvgGain - AvgLoss) / (AvgGain + AvgLoss)
//! ```

use crate::utils::{nan_series, ratio_or_zero};

/// Lookback of [`rsi`] and [`cmo`].
pub fn rsi_lookback(period: usize) -> usize {
    period
}

/// Wilder-averaged gains and losses, fed to `combine` once per bar.
fn wilder(data: &[f64], period: usize, combine: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if period == 0 || data.len() <= period {
        return result;
    }

    let n = period as f64;
    let (mut gain, mut loss) = (0.0, 0.0);
    for i in 1..=period {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gain += change;
        } else {
            loss -= change;
        }
    }
    gain /= n;
    loss /= n;
    result[period] = combine(gain, loss);

    for i in period + 1..data.len() {
        let change = data[i] - data[i - 1];
        gain = (gain * (n - 1.0) + change.max(0.0)) / n;
        loss = (loss * (n - 1.0) + (-change).max(0.0)) / n;
        result[i] = combine(gain, loss);
    }
    result
}

/// Relative Strength Index. Zero when there is no movement at all.
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    wilder(data, period, |gain, loss| 100.0 * ratio_or_zero(gain, gain + loss))
}

/// Chande Momentum Oscillator. Zero when there is no movement at all.
pub fn cmo(data: &[f64], period: usize) -> Vec<f64> {
    wilder(data, period, |gain, loss| 100.0 * ratio_or_zero(gain - loss, gain + loss))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_seed() {
        // Changes: +1, -1, +2. Period 3 -> gain 1.0, loss 1/3.
        let result = rsi(&[10.0, 11.0, 10.0, 12.0, 13.0], 3);
        assert!(result[2].is_nan());
        assert_relative_eq!(result[3], 75.0);
        // Next: gain (1*2 + 1)/3 = 1, loss (1/3*2)/3 = 2/9.
        assert_relative_eq!(result[4], 100.0 * 1.0 / (1.0 + 2.0 / 9.0));
    }

    #[test]
    fn test_monotonic_extremes() {
        let up: Vec<f64> = (0..20).map(f64::from).collect();
        assert!(rsi(&up, 5)[5..].iter().all(|v| *v == 100.0));
        assert!(cmo(&up, 5)[5..].iter().all(|v| *v == 100.0));

        let down: Vec<f64> = up.iter().rev().copied().collect();
        assert!(rsi(&down, 5)[5..].iter().all(|v| *v == 0.0));
        assert!(cmo(&down, 5)[5..].iter().all(|v| *v == -100.0));
    }

    #[test]
    fn test_flat_is_zero() {
        assert!(rsi(&[4.0; 8], 3)[3..].iter().all(|v| *v == 0.0));
    }
}
