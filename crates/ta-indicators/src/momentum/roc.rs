//! Momentum and the rate-of-change family.
//!
//! Each compares a price with the price `period` bars earlier. A zero earlier
//! price yields zero rather than infinity.

use crate::utils::nan_series;

/// Lookback of every function in this module.
pub fn roc_lookback(period: usize) -> usize {
    period
}

fn against_previous(data: &[f64], period: usize, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut result = nan_series(data.len());
    for i in period..data.len() {
        result[i] = f(data[i], data[i - period]);
    }
    result
}

fn relative(data: &[f64], period: usize, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    against_previous(data, period, |price, prev| if prev == 0.0 { 0.0 } else { f(price, prev) })
}

/// Momentum: `price - prev`.
pub fn mom(data: &[f64], period: usize) -> Vec<f64> {
    against_previous(data, period, |price, prev| price - prev)
}

/// Rate of change: `((price / prev) - 1) * 100`.
pub fn roc(data: &[f64], period: usize) -> Vec<f64> {
    relative(data, period, |price, prev| (price / prev - 1.0) * 100.0)
}

/// Rate of change percentage: `(price - prev) / prev`.
pub fn rocp(data: &[f64], period: usize) -> Vec<f64> {
    relative(data, period, |price, prev| (price - prev) / prev)
}

/// Rate of change ratio: `price / prev`.
pub fn rocr(data: &[f64], period: usize) -> Vec<f64> {
    relative(data, period, |price, prev| price / prev)
}

/// Rate of change ratio on a 100 scale: `(price / prev) * 100`.
pub fn rocr100(data: &[f64], period: usize) -> Vec<f64> {
    relative(data, period, |price, prev| price / prev * 100.0)
}
