//! Rolling building blocks shared by the kernels.
//!
//! Every function returns a series as long as its input, with `NaN` in the
//! positions before the first complete window. Composite indicators feed
//! the valid part of one series into the next with [`chain`].

/// A series of `len` NaNs.
pub(crate) fn nan_series(len: usize) -> Vec<f64> {
    vec![f64::NAN; len]
}

/// Apply `f` to `series[start..]` and place the result back at `start`.
///
/// `f` must return a series as long as its argument. When `start` is past
/// the end the result is all NaN.
pub(crate) fn chain(series: &[f64], start: usize, f: impl FnOnce(&[f64]) -> Vec<f64>) -> Vec<f64> {
    let mut full = nan_series(series.len());
    if start < series.len() {
        let tail = f(&series[start..]);
        full[start..].copy_from_slice(&tail[..series.len() - start]);
    }
    full
}

/// Rolling sum over `window` values.
///
/// # Example
///
/// ```text
/// rolling_sum(&[1.0, 2.0, 3.0, 4.0], 2) == [NaN, 3.0, 5.0, 7.0]
/// ```
pub(crate) fn rolling_sum(data: &[f64], window: usize) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if window == 0 || data.len() < window {
        return result;
    }

    let mut sum: f64 = data[..window].iter().sum();
    result[window - 1] = sum;
    for i in window..data.len() {
        sum += data[i] - data[i - window];
        result[i] = sum;
    }
    result
}

/// Simple moving average: the mean of the last `window` values.
pub(crate) fn sma(data: &[f64], window: usize) -> Vec<f64> {
    let n = window as f64;
    let mut result = rolling_sum(data, window);
    for value in &mut result {
        *value /= n;
    }
    result
}

/// Exponential smoothing with factor `alpha`, seeded with the SMA of the
/// first `window` values.
///
/// `EMA(t) = alpha * P(t) + (1 - alpha) * EMA(t - 1)`
pub(crate) fn ema_with_alpha(data: &[f64], window: usize, alpha: f64) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if window == 0 || data.len() < window {
        return result;
    }

    let mut value = data[..window].iter().sum::<f64>() / window as f64;
    result[window - 1] = value;
    for i in window..data.len() {
        value = alpha * data[i] + (1.0 - alpha) * value;
        result[i] = value;
    }
    result
}

/// Exponential moving average with `alpha = 2 / (window + 1)`.
pub(crate) fn ema(data: &[f64], window: usize) -> Vec<f64> {
    ema_with_alpha(data, window, 2.0 / (window as f64 + 1.0))
}

/// Population variance over `window` values.
pub(crate) fn rolling_variance(data: &[f64], window: usize) -> Vec<f64> {
    let mut result = nan_series(data.len());
    if window == 0 || data.len() < window {
        return result;
    }

    let n = window as f64;
    let mut sum: f64 = data[..window].iter().sum();
    let mut sum_sq: f64 = data[..window].iter().map(|x| x * x).sum();
    for i in window - 1..data.len() {
        if i >= window {
            let (add, drop) = (data[i], data[i - window]);
            sum += add - drop;
            sum_sq += add * add - drop * drop;
        }
        let mean = sum / n;
        // Clamp rounding noise on flat windows.
        result[i] = (sum_sq / n - mean * mean).max(0.0);
    }
    result
}

/// Position of the highest value in each window of `window` values.
///
/// Ties resolve to the most recent position. Indices are absolute.
pub(crate) fn rolling_argmax(data: &[f64], window: usize) -> Vec<Option<usize>> {
    rolling_extreme(data, window, |candidate, best| candidate >= best)
}

/// Position of the lowest value in each window, as [`rolling_argmax`].
pub(crate) fn rolling_argmin(data: &[f64], window: usize) -> Vec<Option<usize>> {
    rolling_extreme(data, window, |candidate, best| candidate <= best)
}

fn rolling_extreme(data: &[f64], window: usize, better: impl Fn(f64, f64) -> bool) -> Vec<Option<usize>> {
    let mut result = vec![None; data.len()];
    if window == 0 || data.len() < window {
        return result;
    }

    for i in window - 1..data.len() {
        let start = i + 1 - window;
        let mut best = start;
        for j in start + 1..=i {
            if better(data[j], data[best]) {
                best = j;
            }
        }
        result[i] = Some(best);
    }
    result
}

/// Highest value over `window` values.
pub(crate) fn rolling_max(data: &[f64], window: usize) -> Vec<f64> {
    values_at(data, &rolling_argmax(data, window))
}

/// Lowest value over `window` values.
pub(crate) fn rolling_min(data: &[f64], window: usize) -> Vec<f64> {
    values_at(data, &rolling_argmin(data, window))
}

fn values_at(data: &[f64], positions: &[Option<usize>]) -> Vec<f64> {
    positions
        .iter()
        .map(|position| position.map_or(f64::NAN, |j| data[j]))
        .collect()
}

/// True range of each bar; the first bar has no previous close.
pub(crate) fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let mut result = nan_series(close.len());
    for i in 1..close.len() {
        let prev = close[i - 1];
        result[i] = high[i].max(prev) - low[i].min(prev);
    }
    result
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma() {
        let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0);
        assert_relative_eq!(result[3], 3.0);
        assert_relative_eq!(result[4], 4.0);
    }

    #[test]
    fn test_ema_seeded_with_sma() {
        let result = ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0);
        assert_relative_eq!(result[3], 0.5 * 4.0 + 0.5 * 2.0);
        assert_relative_eq!(result[4], 0.5 * 5.0 + 0.5 * 3.0);
    }

    #[test]
    fn test_short_input() {
        assert!(sma(&[1.0, 2.0], 3).iter().all(|v| v.is_nan()));
        assert!(ema(&[], 3).is_empty());
    }

    #[test]
    fn test_variance() {
        let result = rolling_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 8);
        assert_relative_eq!(result[7], 4.0);

        let flat = rolling_variance(&[3.0; 4], 2);
        assert!(flat[1..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_argmax_prefers_latest() {
        let result = rolling_argmax(&[1.0, 3.0, 3.0, 2.0], 3);
        assert_eq!(result, vec![None, None, Some(2), Some(2)]);

        let result = rolling_argmin(&[1.0, 3.0, 3.0, 2.0], 2);
        assert_eq!(result, vec![None, Some(0), Some(2), Some(3)]);
    }

    #[test]
    fn test_chain_keeps_alignment() {
        let first = sma(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2);
        let second = chain(&first, 1, |tail| sma(tail, 2));
        assert!(second[1].is_nan());
        assert_relative_eq!(second[2], 2.0);
        assert_relative_eq!(second[5], 5.0);

        assert!(chain(&first, 10, |tail| tail.to_vec()).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_true_range() {
        let tr = true_range(&[10.0, 12.0], &[8.0, 11.0], &[9.0, 11.5]);
        assert!(tr[0].is_nan());
        assert_relative_eq!(tr[1], 3.0);
    }
}
