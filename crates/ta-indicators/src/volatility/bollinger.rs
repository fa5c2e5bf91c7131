//! Bollinger Bands and Acceleration Bands.
//!
//! Bollinger Bands place bands a number of standard deviations above and
//! below a moving average. Acceleration Bands widen the high and low by
//! `4 * (High - Low) / (High + Low)` before averaging.

use ta_core::{MaType, RetCode};

use crate::trend::ma::{ma, ma_lookback};
use crate::utils::{nan_series, ratio_or_zero, rolling_variance, sma};

/// Upper, middle and lower band, each as long as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BandsOutput {
    /// Upper band.
    pub upper: Vec<f64>,
    /// Middle band.
    pub middle: Vec<f64>,
    /// Lower band.
    pub lower: Vec<f64>,
}

impl BandsOutput {
    /// The three series in output order.
    pub fn into_array(self) -> [Vec<f64>; 3] {
        [self.upper, self.middle, self.lower]
    }
}

/// Lookback of [`bbands`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn bbands_lookback(period: usize, matype: MaType) -> Result<usize, RetCode> {
    ma_lookback(period, matype)
}

/// Bollinger Bands.
///
/// The deviation is the population standard deviation over `period` values
/// regardless of `matype`.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn bbands(
    data: &[f64],
    period: usize,
    nbdevup: f64,
    nbdevdn: f64,
    matype: MaType,
) -> Result<BandsOutput, RetCode> {
    let middle = ma(data, period, matype)?;
    let deviation: Vec<f64> = if period <= 1 {
        vec![0.0; data.len()]
    } else {
        rolling_variance(data, period).into_iter().map(f64::sqrt).collect()
    };

    let mut upper = nan_series(data.len());
    let mut lower = nan_series(data.len());
    for i in 0..data.len() {
        if !middle[i].is_nan() && !deviation[i].is_nan() {
            upper[i] = middle[i] + nbdevup * deviation[i];
            lower[i] = middle[i] - nbdevdn * deviation[i];
        }
    }
    Ok(BandsOutput { upper, middle, lower })
}

/// Lookback of [`accbands`].
pub fn accbands_lookback(period: usize) -> usize {
    period - 1
}

/// Acceleration Bands: SMAs of the widened high, the close and the widened
/// low.
pub fn accbands(high: &[f64], low: &[f64], close: &[f64], period: usize) -> BandsOutput {
    let factor = |i: usize| 4.0 * ratio_or_zero(high[i] - low[i], high[i] + low[i]);
    let widened_high: Vec<f64> = (0..close.len()).map(|i| high[i] * (1.0 + factor(i))).collect();
    let widened_low: Vec<f64> = (0..close.len()).map(|i| low[i] * (1.0 - factor(i))).collect();

    BandsOutput {
        upper: sma(&widened_high, period),
        middle: sma(close, period),
        lower: sma(&widened_low, period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bbands() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let out = bbands(&data, 8, 2.0, 1.0, MaType::Sma).unwrap();
        assert!(out.middle[6].is_nan());
        assert_relative_eq!(out.middle[7], 5.0);
        // Population standard deviation is 2.
        assert_relative_eq!(out.upper[7], 9.0);
        assert_relative_eq!(out.lower[7], 3.0);
    }

    #[test]
    fn test_bbands_prefix_follows_average() {
        let data: Vec<f64> = (0..40).map(f64::from).collect();
        let out = bbands(&data, 5, 2.0, 2.0, MaType::Dema).unwrap();
        let prefix = out.upper.iter().take_while(|v| v.is_nan()).count();
        assert_eq!(prefix, bbands_lookback(5, MaType::Dema).unwrap());
    }

    #[test]
    fn test_accbands_on_flat_bars() {
        let flat = [10.0; 4];
        let out = accbands(&flat, &flat, &flat, 2);
        assert!(out.upper[0].is_nan());
        assert_relative_eq!(out.upper[1], 10.0);
        assert_relative_eq!(out.lower[3], 10.0);
    }
}
