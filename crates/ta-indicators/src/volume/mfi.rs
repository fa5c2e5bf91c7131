//! Money Flow Index (MFI).
//!
//! MFI is a volume-weighted RSI: raw money flow `TP * Volume` counts as
//! positive when the typical price rises and negative when it falls.

use crate::utils::{nan_series, ratio_or_zero};

/// Lookback of [`mfi`].
pub fn mfi_lookback(period: usize) -> usize {
    period
}

/// Money Flow Index over `period` bars. Zero when no flow moved.
pub fn mfi(high: &[f64], low: &[f64], close: &[f64], volume: &[f64], period: usize) -> Vec<f64> {
    let len = close.len();
    let mut result = nan_series(len);
    if len <= period {
        return result;
    }

    let typical: Vec<f64> = (0..len).map(|i| (high[i] + low[i] + close[i]) / 3.0).collect();
    let mut positive = vec![0.0; len];
    let mut negative = vec![0.0; len];
    for i in 1..len {
        let flow = typical[i] * volume[i];
        if typical[i] > typical[i - 1] {
            positive[i] = flow;
        } else if typical[i] < typical[i - 1] {
            negative[i] = flow;
        }
    }

    for i in period..len {
        let window = i + 1 - period..=i;
        let pos: f64 = positive[window.clone()].iter().sum();
        let neg: f64 = negative[window].iter().sum();
        result[i] = 100.0 * ratio_or_zero(pos, pos + neg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mfi() {
        let price = [10.0, 11.0, 10.0];
        let volume = [1.0, 2.0, 3.0];
        let result = mfi(&price, &price, &price, &volume, 2);
        assert!(result[1].is_nan());
        // Positive flow 22, negative flow 30.
        assert_relative_eq!(result[2], 100.0 * 22.0 / 52.0);
    }

    #[test]
    fn test_rising_is_100() {
        let price: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = mfi(&price, &price, &price, &[5.0; 10], 3);
        assert!(result[3..].iter().all(|v| *v == 100.0));
    }
}
