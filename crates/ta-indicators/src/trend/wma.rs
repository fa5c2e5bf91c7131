//! Weighted Moving Average (WMA).

use crate::utils::nan_series;

/// Lookback of [`wma`].
pub fn wma_lookback(period: usize) -> usize {
    period - 1
}

/// Weighted Moving Average with linear weights `1..=period`, the most
/// recent value weighted highest.
///
/// # Formula
///
/// WMA = (n * Pn + (n - 1) * Pn-1 + ... + 1 * P1) / (n * (n + 1) / 2)
pub fn wma(data: &[f64], period: usize) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if period == 0 || data.len() < period {
        return result;
    }

    let divisor = (period * (period + 1)) as f64 / 2.0;
    for i in period - 1..data.len() {
        let window = &data[i + 1 - period..=i];
        let weighted: f64 = window
            .iter()
            .enumerate()
            .map(|(k, value)| (k + 1) as f64 * value)
            .sum();
        result[i] = weighted / divisor;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wma() {
        let result = wma(&[1.0, 2.0, 3.0, 4.0], 3);
        assert!(result[1].is_nan());
        // (1*1 + 2*2 + 3*3) / 6
        assert_relative_eq!(result[2], 14.0 / 6.0);
        assert_relative_eq!(result[3], 20.0 / 6.0);
    }
}
