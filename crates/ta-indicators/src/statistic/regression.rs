//! Least-squares line over a sliding window.
//!
//! Positions inside the window run from 0 (oldest bar) to `n - 1` (current
//! bar). The fitted line `y = b + m * x` yields:
//!
//! | Function              | Value                  |
//! |-----------------------|------------------------|
//! | `LINEARREG`           | `b + m * (n - 1)`      |
//! | `LINEARREG_SLOPE`     | `m`                    |
//! | `LINEARREG_INTERCEPT` | `b`                    |
//! | `LINEARREG_ANGLE`     | `atan(m)` in degrees   |
//! | `TSF`                 | `b + m * n`            |

use crate::utils::nan_series;

/// Which value of the fitted line to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Value at the current bar.
    Value,
    /// Slope.
    Slope,
    /// Value at the oldest bar of the window.
    Intercept,
    /// Slope angle in degrees.
    Angle,
    /// Value projected one bar ahead.
    Forecast,
}

/// Lookback of [`linear_regression`].
pub fn regression_lookback(period: usize) -> usize {
    period - 1
}

/// Rolling linear regression.
pub fn linear_regression(data: &[f64], period: usize, fit: Fit) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if period == 0 || data.len() < period {
        return result;
    }

    let n = period as f64;
    let sum_x = n * (n - 1.0) / 2.0;
    let sum_xx = n * (n - 1.0) * (2.0 * n - 1.0) / 6.0;
    let divisor = n * sum_xx - sum_x * sum_x;

    for i in regression_lookback(period)..data.len() {
        let window = &data[i + 1 - period..=i];
        let sum_y: f64 = window.iter().sum();
        let sum_xy: f64 = window.iter().enumerate().map(|(x, y)| x as f64 * y).sum();

        let slope = if divisor == 0.0 { 0.0 } else { (n * sum_xy - sum_x * sum_y) / divisor };
        let intercept = (sum_y - slope * sum_x) / n;

        result[i] = match fit {
            Fit::Value => intercept + slope * (n - 1.0),
            Fit::Slope => slope,
            Fit::Intercept => intercept,
            Fit::Angle => slope.atan().to_degrees(),
            Fit::Forecast => intercept + slope * n,
        };
    }
    result
}
