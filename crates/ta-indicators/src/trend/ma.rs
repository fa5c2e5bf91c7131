//! Moving average selected by [`MaType`].
//!
//! Used directly by `MA` and by every indicator with a `matype` parameter.
//! A period of 1 is the identity for every type.

use ta_core::{MaType, RetCode};

use super::{ema, kama, sma, wma};
use crate::utils::nan_series;

/// Vector factor used when T3 is selected through a `matype` parameter.
const T3_VFACTOR: f64 = 0.7;

/// Lookback of [`ma`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for [`MaType::Mama`].
pub fn ma_lookback(period: usize, matype: MaType) -> Result<usize, RetCode> {
    if period <= 1 {
        return Ok(0);
    }
    Ok(match matype {
        MaType::Sma => sma::sma_lookback(period),
        MaType::Ema => ema::ema_lookback(period),
        MaType::Wma => wma::wma_lookback(period),
        MaType::Dema => ema::dema_lookback(period),
        MaType::Tema => ema::tema_lookback(period),
        MaType::Trima => sma::trima_lookback(period),
        MaType::Kama => kama::kama_lookback(period),
        MaType::T3 => ema::t3_lookback(period),
        MaType::Mama => return Err(RetCode::NotSupported),
    })
}

/// Moving average of `data`.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for [`MaType::Mama`].
pub fn ma(data: &[f64], period: usize, matype: MaType) -> Result<Vec<f64>, RetCode> {
    if period <= 1 {
        return Ok(data.to_vec());
    }
    Ok(match matype {
        MaType::Sma => sma::sma(data, period),
        MaType::Ema => ema::ema(data, period),
        MaType::Wma => wma::wma(data, period),
        MaType::Dema => ema::dema(data, period),
        MaType::Tema => ema::tema(data, period),
        MaType::Trima => sma::trima(data, period),
        MaType::Kama => kama::kama(data, period),
        MaType::T3 => ema::t3(data, period, T3_VFACTOR),
        MaType::Mama => return Err(RetCode::NotSupported),
    })
}

/// Moving average of `series[start..]`, aligned with `series`.
///
/// # Errors
///
/// As [`ma`].
pub fn ma_from(series: &[f64], start: usize, period: usize, matype: MaType) -> Result<Vec<f64>, RetCode> {
    let mut full = nan_series(series.len());
    if start < series.len() {
        let tail = ma(&series[start..], period, matype)?;
        full[start..].copy_from_slice(&tail);
    }
    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_matches_prefix() {
        let data: Vec<f64> = (1..=80).map(f64::from).collect();
        for matype in MaType::ALL {
            if matype == MaType::Mama {
                continue;
            }
            let result = ma(&data, 5, matype).unwrap();
            let prefix = result.iter().take_while(|v| v.is_nan()).count();
            assert_eq!(prefix, ma_lookback(5, matype).unwrap(), "{matype}");
        }
    }

    #[test]
    fn test_period_one_is_identity() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(ma(&data, 1, MaType::Kama).unwrap(), data.to_vec());
        assert_eq!(ma_lookback(1, MaType::T3), Ok(0));
    }

    #[test]
    fn test_mama_not_supported() {
        assert_eq!(ma_lookback(5, MaType::Mama), Err(RetCode::NotSupported));
        assert_eq!(ma(&[1.0; 10], 5, MaType::Mama), Err(RetCode::NotSupported));
    }

    #[test]
    fn test_ma_from_aligns() {
        let series = [f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        let result = ma_from(&series, 2, 2, MaType::Sma).unwrap();
        assert!(result[2].is_nan());
        assert_eq!(result[3], 1.5);
        assert_eq!(result[4], 2.5);
    }
}
