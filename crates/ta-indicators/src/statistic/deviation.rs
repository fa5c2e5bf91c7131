//! Variance, standard deviation and average deviation over a window.
//!
//! All use the population form (divide by `n`).

use crate::utils::{nan_series, rolling_variance, sma};

/// Lookback of every function in this module.
pub fn deviation_lookback(period: usize) -> usize {
    period - 1
}

/// Variance.
pub fn var(data: &[f64], period: usize) -> Vec<f64> {
    rolling_variance(data, period)
}

/// Standard deviation scaled by `nbdev`.
pub fn stddev(data: &[f64], period: usize, nbdev: f64) -> Vec<f64> {
    rolling_variance(data, period)
        .into_iter()
        .map(|v| v.sqrt() * nbdev)
        .collect()
}

/// Mean absolute deviation from the window mean.
pub fn avgdev(data: &[f64], period: usize) -> Vec<f64> {
    let mean = sma(data, period);
    let mut result = nan_series(data.len());
    if period == 0 {
        return result;
    }
    for i in deviation_lookback(period)..data.len() {
        let total: f64 = data[i + 1 - period..=i].iter().map(|x| (x - mean[i]).abs()).sum();
        result[i] = total / period as f64;
    }
    result
}
