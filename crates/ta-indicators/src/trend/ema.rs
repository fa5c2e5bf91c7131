//! Exponential moving averages and their cascades.
//!
//! All cascades run each stage over the valid part of the previous one, so a
//! stage of period `n` adds `n - 1` to the lookback.

use crate::utils::{self, chain};

/// Lookback of [`ema`].
pub fn ema_lookback(period: usize) -> usize {
    period - 1
}

/// Exponential Moving Average with `alpha = 2 / (period + 1)`, seeded with
/// the SMA of the first `period` values.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    utils::ema(data, period)
}

/// `depth` nested EMAs of `data`; element `k` is the `k + 1`-th stage.
fn cascade(data: &[f64], period: usize, depth: usize) -> Vec<Vec<f64>> {
    let mut stages: Vec<Vec<f64>> = Vec::with_capacity(depth);
    stages.push(utils::ema(data, period));
    for stage in 1..depth {
        let next = chain(&stages[stage - 1], stage * (period - 1), |tail| utils::ema(tail, period));
        stages.push(next);
    }
    stages
}

/// Lookback of [`dema`].
pub fn dema_lookback(period: usize) -> usize {
    2 * (period - 1)
}

/// Double Exponential Moving Average: `2 * EMA - EMA(EMA)`.
pub fn dema(data: &[f64], period: usize) -> Vec<f64> {
    let stages = cascade(data, period, 2);
    stages[0].iter().zip(&stages[1]).map(|(e1, e2)| 2.0 * e1 - e2).collect()
}

/// Lookback of [`tema`].
pub fn tema_lookback(period: usize) -> usize {
    3 * (period - 1)
}

/// Triple Exponential Moving Average: `3 * e1 - 3 * e2 + e3`.
pub fn tema(data: &[f64], period: usize) -> Vec<f64> {
    let stages = cascade(data, period, 3);
    (0..data.len())
        .map(|i| 3.0 * stages[0][i] - 3.0 * stages[1][i] + stages[2][i])
        .collect()
}

/// Lookback of [`t3`].
pub fn t3_lookback(period: usize) -> usize {
    6 * (period - 1)
}

/// Tillson T3: a weighted blend of the last four stages of six cascaded EMAs.
///
/// `vfactor` (0 to 1) controls how much the curve is allowed to overshoot.
pub fn t3(data: &[f64], period: usize, vfactor: f64) -> Vec<f64> {
    let stages = cascade(data, period, 6);
    let v = vfactor;
    let c1 = -v * v * v;
    let c2 = 3.0 * v * v + 3.0 * v * v * v;
    let c3 = -6.0 * v * v - 3.0 * v - 3.0 * v * v * v;
    let c4 = 1.0 + 3.0 * v + v * v * v + 3.0 * v * v;
    (0..data.len())
        .map(|i| c1 * stages[5][i] + c2 * stages[4][i] + c3 * stages[3][i] + c4 * stages[2][i])
        .collect()
}

/// Lookback of [`trix`].
pub fn trix_lookback(period: usize) -> usize {
    3 * (period - 1) + 1
}

/// TRIX: one-bar rate of change, in percent, of a triple-smoothed EMA.
pub fn trix(data: &[f64], period: usize) -> Vec<f64> {
    let stages = cascade(data, period, 3);
    let smooth = &stages[2];
    let mut result = utils::nan_series(data.len());
    for i in trix_lookback(period)..data.len() {
        result[i] = utils::ratio_or_zero(smooth[i] - smooth[i - 1], smooth[i - 1]) * 100.0;
    }
    result
}
