//! Commodity Channel Index (CCI).
//!
//! ```text
//! TP  = (High + Low + Close) / 3
//! CCI = (TP - SMA(TP)) / (0.015 * MeanDeviation(TP))
//! ```

use crate::utils::{nan_series, sma};

const SCALE: f64 = 0.015;

/// Lookback of [`cci`].
pub fn cci_lookback(period: usize) -> usize {
    period - 1
}

/// Commodity Channel Index. Zero when the window has no deviation.
pub fn cci(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let typical: Vec<f64> = close
        .iter()
        .zip(high.iter().zip(low))
        .map(|(c, (h, l))| (h + l + c) / 3.0)
        .collect();
    let mean = sma(&typical, period);

    let mut result = nan_series(close.len());
    for i in cci_lookback(period)..close.len() {
        let window = &typical[i + 1 - period..=i];
        let deviation = window.iter().map(|tp| (tp - mean[i]).abs()).sum::<f64>() / period as f64;
        result[i] = if deviation == 0.0 {
            0.0
        } else {
            (typical[i] - mean[i]) / (SCALE * deviation)
        };
    }
    result
}
