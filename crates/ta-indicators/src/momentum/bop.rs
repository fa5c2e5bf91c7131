//! Balance Of Power and Intraday Momentum Index.

use crate::utils::{nan_series, ratio_or_zero};

/// Balance Of Power: `(Close - Open) / (High - Low)`, zero on a flat bar.
pub fn bop(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    (0..close.len())
        .map(|i| ratio_or_zero(close[i] - open[i], high[i] - low[i]))
        .collect()
}

/// Lookback of [`imi`].
pub fn imi_lookback(period: usize) -> usize {
    period - 1
}

/// Intraday Momentum Index: share of up-bar bodies in all bodies over
/// `period` bars, in percent.
pub fn imi(open: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let mut result = nan_series(close.len());
    for i in imi_lookback(period)..close.len() {
        let (mut up, mut down) = (0.0, 0.0);
        for j in i + 1 - period..=i {
            let body = close[j] - open[j];
            if body > 0.0 {
                up += body;
            } else {
                down -= body;
            }
        }
        result[i] = 100.0 * ratio_or_zero(up, up + down);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bop() {
        let result = bop(&[10.0, 5.0], &[12.0, 5.0], &[8.0, 5.0], &[11.0, 5.0]);
        assert_relative_eq!(result[0], 0.25);
        assert_eq!(result[1], 0.0);
    }

    #[test]
    fn test_imi() {
        let open = [10.0, 12.0, 11.0];
        let close = [12.0, 11.0, 14.0];
        let result = imi(&open, &close, 3);
        assert!(result[1].is_nan());
        // Up bodies 2 + 3, down body 1.
        assert_relative_eq!(result[2], 100.0 * 5.0 / 6.0);
    }
}
