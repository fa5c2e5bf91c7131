//! Kaufman Adaptive Moving Average (KAMA).
//!
//! The smoothing constant moves between a 2-period and a 30-period EMA
//! factor according to the efficiency ratio: net change over the window
//! divided by the sum of absolute bar-to-bar changes.

use crate::utils::nan_series;

const FAST: f64 = 2.0 / 3.0;
const SLOW: f64 = 2.0 / 31.0;

/// Lookback of [`kama`].
pub fn kama_lookback(period: usize) -> usize {
    period
}

/// Kaufman Adaptive Moving Average.
///
/// Seeded with the value just before the first output.
pub fn kama(data: &[f64], period: usize) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if period == 0 || data.len() <= period {
        return result;
    }

    let mut previous = data[period - 1];
    for i in period..data.len() {
        let direction = (data[i] - data[i - period]).abs();
        let volatility: f64 = (i + 1 - period..=i).map(|j| (data[j] - data[j - 1]).abs()).sum();
        let efficiency = if volatility > 0.0 { direction / volatility } else { 0.0 };
        let smoothing = (efficiency * (FAST - SLOW) + SLOW).powi(2);

        previous += smoothing * (data[i] - previous);
        result[i] = previous;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_efficient_trend_uses_fast_factor() {
        let data: Vec<f64> = (0..20).map(f64::from).collect();
        let result = kama(&data, 10);
        assert!(result[9].is_nan());
        // Efficiency 1: smoothing = FAST^2 applied to seed 9.0.
        assert_relative_eq!(result[10], 9.0 + FAST * FAST * 1.0);
    }

    #[test]
    fn test_flat_input_stays_flat() {
        let result = kama(&[5.0; 12], 4);
        assert!(result[4..].iter().all(|v| *v == 5.0));
    }
}
