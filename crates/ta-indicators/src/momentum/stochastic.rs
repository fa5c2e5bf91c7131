//! Stochastic Oscillator, slow and fast.
//!
//! # Formula
//!
//! ```text
//! FastK = 100 * (Close - Lowest Low) / (Highest High - Lowest Low)
//! FastD = MA(FastK)
//! SlowK = MA(FastK), SlowD = MA(SlowK)
//! ```
//!
//! When the window has no range FastK is zero.

use ta_core::{MaType, RetCode};

use crate::trend::ma::{ma_from, ma_lookback};
use crate::utils::{nan_series, ratio_or_zero, rolling_max, rolling_min};

/// The %K and %D lines, each as long as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct StochOutput {
    /// %K line.
    pub k: Vec<f64>,
    /// %D line.
    pub d: Vec<f64>,
}

impl StochOutput {
    /// The two series in output order.
    pub fn into_array(self) -> [Vec<f64>; 2] {
        [self.k, self.d]
    }
}

/// Raw %K over a window of `period` bars, aligned with the input.
pub(crate) fn raw_k(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let highest = rolling_max(high, period);
    let lowest = rolling_min(low, period);
    let mut result = nan_series(close.len());
    for i in period.saturating_sub(1)..close.len() {
        if !highest[i].is_nan() {
            result[i] = 100.0 * ratio_or_zero(close[i] - lowest[i], highest[i] - lowest[i]);
        }
    }
    result
}

/// Lookback of [`stochf`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stochf_lookback(fastk: usize, fastd: usize, fastd_matype: MaType) -> Result<usize, RetCode> {
    Ok(fastk - 1 + ma_lookback(fastd, fastd_matype)?)
}

/// Fast stochastic.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stochf(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fastk: usize,
    fastd: usize,
    fastd_matype: MaType,
) -> Result<StochOutput, RetCode> {
    let k = raw_k(high, low, close, fastk);
    let d = ma_from(&k, fastk - 1, fastd, fastd_matype)?;
    Ok(StochOutput { k, d })
}

/// Lookback of [`stoch`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stoch_lookback(fastk: usize, slowk: (usize, MaType), slowd: (usize, MaType)) -> Result<usize, RetCode> {
    Ok(fastk - 1 + ma_lookback(slowk.0, slowk.1)? + ma_lookback(slowd.0, slowd.1)?)
}

/// Slow stochastic: %K smoothed once more, %D smoothed from that.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stoch(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fastk: usize,
    slowk: (usize, MaType),
    slowd: (usize, MaType),
) -> Result<StochOutput, RetCode> {
    let raw = raw_k(high, low, close, fastk);
    let k_start = fastk - 1;
    let k = ma_from(&raw, k_start, slowk.0, slowk.1)?;
    let d_start = k_start + ma_lookback(slowk.0, slowk.1)?;
    let d = ma_from(&k, d_start, slowd.0, slowd.1)?;
    Ok(StochOutput { k, d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn leading_nans(series: &[f64]) -> usize {
        series.iter().take_while(|v| v.is_nan()).count()
    }

    #[test]
    fn test_raw_k() {
        let high = [10.0, 12.0, 11.0];
        let low = [8.0, 9.0, 7.0];
        let close = [9.0, 11.0, 10.0];
        let k = raw_k(&high, &low, &close, 3);
        assert!(k[1].is_nan());
        assert_relative_eq!(k[2], 60.0);
    }

    #[test]
    fn test_flat_window_is_zero() {
        let flat = [5.0; 6];
        let out = stochf(&flat, &flat, &flat, 3, 2, MaType::Sma).unwrap();
        assert!(out.k[2..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_lookbacks_match_prefix() {
        let close: Vec<f64> = (0..60).map(|i| 20.0 + (i as f64 * 0.7).cos() * 3.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();

        let fast = stochf(&high, &low, &close, 5, 3, MaType::Sma).unwrap();
        assert_eq!(leading_nans(&fast.k), 4);
        assert_eq!(leading_nans(&fast.d), stochf_lookback(5, 3, MaType::Sma).unwrap());

        let slow = stoch(&high, &low, &close, 5, (3, MaType::Sma), (3, MaType::Ema)).unwrap();
        assert_eq!(
            leading_nans(&slow.d),
            stoch_lookback(5, (3, MaType::Sma), (3, MaType::Ema)).unwrap()
        );
        assert_eq!(leading_nans(&slow.k), 6);
    }
}
