//! Pearson correlation and beta between two series.

use crate::utils::nan_series;

/// Lookback of [`correl`].
pub fn correl_lookback(period: usize) -> usize {
    period - 1
}

/// Pearson's correlation coefficient over `period` pairs. Zero when either
/// series is flat.
pub fn correl(x: &[f64], y: &[f64], period: usize) -> Vec<f64> {
    let mut result = nan_series(x.len());
    if period == 0 {
        return result;
    }
    let n = period as f64;
    for i in correl_lookback(period)..x.len() {
        let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for j in i + 1 - period..=i {
            sx += x[j];
            sy += y[j];
            sxx += x[j] * x[j];
            syy += y[j] * y[j];
            sxy += x[j] * y[j];
        }
        let spread = (sxx - sx * sx / n) * (syy - sy * sy / n);
        result[i] = if spread > 0.0 {
            (sxy - sx * sy / n) / spread.sqrt()
        } else {
            0.0
        };
    }
    result
}

/// Lookback of [`beta`].
pub fn beta_lookback(period: usize) -> usize {
    period
}

fn change(series: &[f64], i: usize) -> f64 {
    let prev = series[i - 1];
    if prev == 0.0 {
        0.0
    } else {
        (series[i] - prev) / prev
    }
}

/// Beta: regression slope of the returns of `y` on the returns of `x` over
/// `period` returns.
pub fn beta(x: &[f64], y: &[f64], period: usize) -> Vec<f64> {
    let mut result = nan_series(x.len());
    let n = period as f64;
    for i in beta_lookback(period)..x.len() {
        let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
        for j in i + 1 - period..=i {
            let (rx, ry) = (change(x, j), change(y, j));
            sx += rx;
            sy += ry;
            sxx += rx * rx;
            sxy += rx * ry;
        }
        let divisor = n * sxx - sx * sx;
        result[i] = if divisor == 0.0 { 0.0 } else { (n * sxy - sx * sy) / divisor };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_correl_signs() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let up: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let down: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!(correl(&x, &up, 5)[3].is_nan());
        assert_relative_eq!(correl(&x, &up, 5)[4], 1.0, epsilon = 1e-9);
        assert_relative_eq!(correl(&x, &down, 5)[9], -1.0, epsilon = 1e-9);
        assert_eq!(correl(&x, &[3.0; 10], 5)[9], 0.0);
    }

    #[test]
    fn test_beta_of_doubled_returns() {
        let x = [100.0, 101.0, 99.0, 102.0, 104.0, 103.0];
        // y moves twice as much in relative terms each bar.
        let mut y = vec![50.0];
        for i in 1..x.len() {
            let r = (x[i] - x[i - 1]) / x[i - 1];
            y.push(y[i - 1] * (1.0 + 2.0 * r));
        }
        let result = beta(&x, &y, 4);
        assert!(result[3].is_nan());
        assert_relative_eq!(result[4], 2.0, epsilon = 1e-9);
        assert_relative_eq!(result[5], 2.0, epsilon = 1e-9);
    }
}
