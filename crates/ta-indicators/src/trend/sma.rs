//! Simple and triangular moving averages.

use crate::utils::{self, chain};

/// Lookback of [`sma`].
pub fn sma_lookback(period: usize) -> usize {
    period - 1
}

/// Simple Moving Average: the unweighted mean of the last `period` values.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    utils::sma(data, period)
}

/// Lookback of [`trima`].
pub fn trima_lookback(period: usize) -> usize {
    period - 1
}

/// Triangular Moving Average: an SMA of an SMA, weighting the middle of the
/// window most.
///
/// Odd periods use two SMAs of `(n + 1) / 2`; even periods use `n / 2`
/// followed by `n / 2 + 1`.
pub fn trima(data: &[f64], period: usize) -> Vec<f64> {
    let (first, second) = if period % 2 == 1 {
        let half = (period + 1) / 2;
        (half, half)
    } else {
        (period / 2, period / 2 + 1)
    };
    let inner = utils::sma(data, first);
    chain(&inner, first - 1, |tail| utils::sma(tail, second))
}
