//! Moving Average Convergence Divergence (MACD) and the price oscillators.
//!
//! MACD is the difference of a fast and a slow moving average; its signal
//! line is a moving average of that difference and the histogram is the gap
//! between the two. APO and PPO are the bare difference, absolute and in
//! percent. A slow period shorter than the fast one is swapped.

use ta_core::{MaType, RetCode};

use super::ma::{ma, ma_from, ma_lookback};
use crate::utils::{self, chain, ratio_or_zero};

/// MACD line, signal line and histogram, each as long as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    /// Fast average minus slow average.
    pub macd: Vec<f64>,
    /// Moving average of the MACD line.
    pub signal: Vec<f64>,
    /// MACD line minus signal line.
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    fn from_line(macd: Vec<f64>, signal: Vec<f64>) -> Self {
        let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
        Self {
            macd,
            signal,
            histogram,
        }
    }

    /// The three series in output order.
    pub fn into_array(self) -> [Vec<f64>; 3] {
        [self.macd, self.signal, self.histogram]
    }
}

fn ordered(fast: usize, slow: usize) -> (usize, usize) {
    if slow < fast {
        (slow, fast)
    } else {
        (fast, slow)
    }
}

fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(a, b)| a - b).collect()
}

/// Lookback of [`macd`].
pub fn macd_lookback(fast: usize, slow: usize, signal: usize) -> usize {
    let (_, slow) = ordered(fast, slow);
    (slow - 1) + (signal - 1)
}

/// MACD over exponential moving averages.
pub fn macd(data: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    let (fast, slow) = ordered(fast, slow);
    let line = difference(&utils::ema(data, fast), &utils::ema(data, slow));
    let signal_line = chain(&line, slow - 1, |tail| utils::ema(tail, signal));
    MacdOutput::from_line(line, signal_line)
}

/// Fixed MACD periods and smoothing factors.
const FIX_FAST: (usize, f64) = (12, 0.15);
const FIX_SLOW: (usize, f64) = (26, 0.075);

/// Lookback of [`macdfix`].
pub fn macdfix_lookback(signal: usize) -> usize {
    (FIX_SLOW.0 - 1) + (signal - 1)
}

/// MACD with fixed 12/26 periods and smoothing factors 0.15 and 0.075.
pub fn macdfix(data: &[f64], signal: usize) -> MacdOutput {
    let fast = utils::ema_with_alpha(data, FIX_FAST.0, FIX_FAST.1);
    let slow = utils::ema_with_alpha(data, FIX_SLOW.0, FIX_SLOW.1);
    let line = difference(&fast, &slow);
    let signal_line = chain(&line, FIX_SLOW.0 - 1, |tail| utils::ema(tail, signal));
    MacdOutput::from_line(line, signal_line)
}

/// One moving-average leg: period and type.
pub type Leg = (usize, MaType);

fn ordered_legs(fast: Leg, slow: Leg) -> (Leg, Leg) {
    if slow.0 < fast.0 {
        (slow, fast)
    } else {
        (fast, slow)
    }
}

fn legs_lookback(fast: Leg, slow: Leg) -> Result<usize, RetCode> {
    let (fast, slow) = ordered_legs(fast, slow);
    Ok(ma_lookback(fast.0, fast.1)?.max(ma_lookback(slow.0, slow.1)?))
}

/// Lookback of [`macdext`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] when a leg uses an unsupported average.
pub fn macdext_lookback(fast: Leg, slow: Leg, signal: Leg) -> Result<usize, RetCode> {
    Ok(legs_lookback(fast, slow)? + ma_lookback(signal.0, signal.1)?)
}

/// MACD with a selectable average per leg.
///
/// # Errors
///
/// [`RetCode::NotSupported`] when a leg uses an unsupported average.
pub fn macdext(data: &[f64], fast: Leg, slow: Leg, signal: Leg) -> Result<MacdOutput, RetCode> {
    let start = legs_lookback(fast, slow)?;
    let (fast, slow) = ordered_legs(fast, slow);
    let line = difference(&ma(data, fast.0, fast.1)?, &ma(data, slow.0, slow.1)?);
    let signal_line = ma_from(&line, start, signal.0, signal.1)?;
    Ok(MacdOutput::from_line(line, signal_line))
}

/// Lookback of [`apo`] and [`ppo`].
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn oscillator_lookback(fast: usize, slow: usize, matype: MaType) -> Result<usize, RetCode> {
    legs_lookback((fast, matype), (slow, matype))
}

/// Absolute Price Oscillator: fast average minus slow average.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn apo(data: &[f64], fast: usize, slow: usize, matype: MaType) -> Result<Vec<f64>, RetCode> {
    let (fast, slow) = ordered(fast, slow);
    Ok(difference(&ma(data, fast, matype)?, &ma(data, slow, matype)?))
}

/// Percentage Price Oscillator: `(fast - slow) / slow * 100`, zero when the
/// slow average is zero.
///
/// # Errors
///
/// [`RetCode::NotSupported`] for an unsupported average.
pub fn ppo(data: &[f64], fast: usize, slow: usize, matype: MaType) -> Result<Vec<f64>, RetCode> {
    let (fast, slow) = ordered(fast, slow);
    let fast = ma(data, fast, matype)?;
    let slow = ma(data, slow, matype)?;
    Ok(fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| {
            if s.is_nan() || f.is_nan() {
                f64::NAN
            } else {
                ratio_or_zero(f - s, *s) * 100.0
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wave(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect()
    }

    fn leading_nans(series: &[f64]) -> usize {
        series.iter().take_while(|v| v.is_nan()).count()
    }

    #[test]
    fn test_macd_lookback_and_histogram() {
        let data = wave(100);
        let out = macd(&data, 12, 26, 9);
        assert_eq!(leading_nans(&out.signal), macd_lookback(12, 26, 9));
        assert_eq!(leading_nans(&out.histogram), 33);
        for i in 33..100 {
            assert_relative_eq!(out.histogram[i], out.macd[i] - out.signal[i]);
        }
    }

    #[test]
    fn test_swapped_periods() {
        let data = wave(60);
        let swapped = macd(&data, 26, 12, 9);
        let plain = macd(&data, 12, 26, 9);
        assert_eq!(swapped.signal[33..], plain.signal[33..]);
        assert_eq!(macd_lookback(26, 12, 9), 33);
    }

    #[test]
    fn test_macdext_with_ema_matches_macd() {
        let data = wave(100);
        let ext = macdext(&data, (12, MaType::Ema), (26, MaType::Ema), (9, MaType::Ema)).unwrap();
        let plain = macd(&data, 12, 26, 9);
        for i in 33..100 {
            assert_relative_eq!(ext.signal[i], plain.signal[i], epsilon = 1e-12);
        }
        assert_eq!(
            macdext_lookback((12, MaType::Ema), (26, MaType::Ema), (9, MaType::Ema)),
            Ok(33)
        );
    }

    #[test]
    fn test_macdfix_prefix() {
        let out = macdfix(&wave(80), 9);
        assert_eq!(leading_nans(&out.signal), macdfix_lookback(9));
    }

    #[test]
    fn test_oscillators_on_flat_input() {
        let data = vec![10.0; 40];
        let apo = apo(&data, 3, 10, MaType::Sma).unwrap();
        let ppo = ppo(&data, 3, 10, MaType::Sma).unwrap();
        assert_eq!(leading_nans(&apo), oscillator_lookback(3, 10, MaType::Sma).unwrap());
        assert!(apo[9..].iter().all(|v| *v == 0.0));
        assert!(ppo[9..].iter().all(|v| *v == 0.0));
    }
}
