//! Stochastic RSI: the fast stochastic formula applied to RSI values.

use ta_core::{MaType, RetCode};

use super::rsi::{rsi, rsi_lookback};
use super::stochastic::{stochf, stochf_lookback, StochOutput};
use crate::utils::chain;

/// Lookback of [`stochrsi`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stochrsi_lookback(period: usize, fastk: usize, fastd: usize, fastd_matype: MaType) -> Result<usize, RetCode> {
    Ok(rsi_lookback(period) + stochf_lookback(fastk, fastd, fastd_matype)?)
}

/// Stochastic RSI.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn stochrsi(
    data: &[f64],
    period: usize,
    fastk: usize,
    fastd: usize,
    fastd_matype: MaType,
) -> Result<StochOutput, RetCode> {
    let rsi = rsi(data, period);
    let start = rsi_lookback(period);
    let tail = rsi.get(start..).unwrap_or_default();
    let fast = stochf(tail, tail, tail, fastk, fastd, fastd_matype)?;
    Ok(StochOutput {
        k: chain(&rsi, start, |_| fast.k.clone()),
        d: chain(&rsi, start, |_| fast.d.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_bounds() {
        let data: Vec<f64> = (0..80).map(|i| 50.0 + (i as f64 * 0.45).sin() * 6.0).collect();
        let out = stochrsi(&data, 14, 5, 3, MaType::Sma).unwrap();
        let prefix = out.d.iter().take_while(|v| v.is_nan()).count();
        assert_eq!(prefix, stochrsi_lookback(14, 5, 3, MaType::Sma).unwrap());
        for value in out.k.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(value));
        }
    }

    #[test]
    fn test_short_input() {
        let out = stochrsi(&[1.0, 2.0], 14, 5, 3, MaType::Sma).unwrap();
        assert!(out.k.iter().all(|v| v.is_nan()));
    }
}
