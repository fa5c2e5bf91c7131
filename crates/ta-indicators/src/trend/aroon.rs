//! Aroon indicator and oscillator.
//!
//! Aroon measures how many bars have passed since the highest high and the
//! lowest low within the last `period + 1` bars.

use crate::utils::{nan_series, rolling_argmax, rolling_argmin};

/// Aroon down and up lines, each as long as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct AroonOutput {
    /// `100 * (period - bars since lowest low) / period`.
    pub down: Vec<f64>,
    /// `100 * (period - bars since highest high) / period`.
    pub up: Vec<f64>,
}

/// Lookback of [`aroon`] and [`aroonosc`].
pub fn aroon_lookback(period: usize) -> usize {
    period
}

/// Aroon down and up.
pub fn aroon(high: &[f64], low: &[f64], period: usize) -> AroonOutput {
    let window = period + 1;
    let highest = rolling_argmax(high, window);
    let lowest = rolling_argmin(low, window);
    let scale = 100.0 / period as f64;

    let line = |positions: &[Option<usize>]| -> Vec<f64> {
        let mut result = nan_series(positions.len());
        for (i, position) in positions.iter().enumerate() {
            if let Some(j) = position {
                result[i] = scale * (period - (i - j)) as f64;
            }
        }
        result
    };

    AroonOutput {
        down: line(&lowest),
        up: line(&highest),
    }
}

/// Aroon Oscillator: up minus down.
pub fn aroonosc(high: &[f64], low: &[f64], period: usize) -> Vec<f64> {
    let lines = aroon(high, low, period);
    lines.up.iter().zip(&lines.down).map(|(u, d)| u - d).collect()
}
