//! Directional movement: +DM, -DM, +DI, -DI, DX, ADX and ADXR.
//!
//! One-bar movement is `+DM1 = H - H[-1]` when it exceeds `L[-1] - L` and is
//! positive (and symmetrically for `-DM1`). Sums over the period are then
//! smoothed with Wilder's rule `S = S - S / n + x`.

use crate::utils::{nan_series, ratio_or_zero};

/// Which side of the movement to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Upward movement (+DM, +DI).
    Plus,
    /// Downward movement (-DM, -DI).
    Minus,
}

fn movement(high: &[f64], low: &[f64], i: usize) -> (f64, f64) {
    let up = high[i] - high[i - 1];
    let down = low[i - 1] - low[i];
    let plus = if up > 0.0 && up > down { up } else { 0.0 };
    let minus = if down > 0.0 && down > up { down } else { 0.0 };
    (plus, minus)
}

fn true_range(high: &[f64], low: &[f64], close: &[f64], i: usize) -> f64 {
    high[i].max(close[i - 1]) - low[i].min(close[i - 1])
}

fn pick(direction: Direction, (plus, minus): (f64, f64)) -> f64 {
    match direction {
        Direction::Plus => plus,
        Direction::Minus => minus,
    }
}

/// Lookback of [`dm`].
pub fn dm_lookback(period: usize) -> usize {
    if period > 1 {
        period - 1
    } else {
        1
    }
}

/// Directional movement, Wilder-smoothed over `period` bars.
pub fn dm(high: &[f64], low: &[f64], period: usize, direction: Direction) -> Vec<f64> {
    let len = high.len();
    let mut result = nan_series(len);
    let start = dm_lookback(period);
    if len <= start {
        return result;
    }

    if period == 1 {
        for i in 1..len {
            result[i] = pick(direction, movement(high, low, i));
        }
        return result;
    }

    let n = period as f64;
    let mut smoothed: f64 = (1..period).map(|i| pick(direction, movement(high, low, i))).sum();
    result[start] = smoothed;
    for i in period..len {
        smoothed = smoothed - smoothed / n + pick(direction, movement(high, low, i));
        result[i] = smoothed;
    }
    result
}

/// Smoothed +DI and -DI, as percentages, for each bar from `period` on.
fn directional_indicators(high: &[f64], low: &[f64], close: &[f64], period: usize) -> (Vec<f64>, Vec<f64>) {
    let len = close.len();
    let mut plus = nan_series(len);
    let mut minus = nan_series(len);
    if len <= period {
        return (plus, minus);
    }

    if period == 1 {
        for i in 1..len {
            let (p, m) = movement(high, low, i);
            let tr = true_range(high, low, close, i);
            plus[i] = ratio_or_zero(p, tr) * 100.0;
            minus[i] = ratio_or_zero(m, tr) * 100.0;
        }
        return (plus, minus);
    }

    let n = period as f64;
    let (mut sp, mut sm, mut st) = (0.0, 0.0, 0.0);
    for i in 1..period {
        let (p, m) = movement(high, low, i);
        sp += p;
        sm += m;
        st += true_range(high, low, close, i);
    }
    for i in period..len {
        let (p, m) = movement(high, low, i);
        sp = sp - sp / n + p;
        sm = sm - sm / n + m;
        st = st - st / n + true_range(high, low, close, i);
        plus[i] = ratio_or_zero(sp, st) * 100.0;
        minus[i] = ratio_or_zero(sm, st) * 100.0;
    }
    (plus, minus)
}

/// Lookback of [`di`].
pub fn di_lookback(period: usize) -> usize {
    period.max(1)
}

/// Directional indicator: smoothed movement over smoothed true range, in
/// percent.
pub fn di(high: &[f64], low: &[f64], close: &[f64], period: usize, direction: Direction) -> Vec<f64> {
    let (plus, minus) = directional_indicators(high, low, close, period);
    match direction {
        Direction::Plus => plus,
        Direction::Minus => minus,
    }
}

/// Lookback of [`dx`].
pub fn dx_lookback(period: usize) -> usize {
    period
}

/// Directional Movement Index: `|+DI - -DI| / (+DI + -DI) * 100`.
pub fn dx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let (plus, minus) = directional_indicators(high, low, close, period);
    plus.iter()
        .zip(&minus)
        .map(|(p, m)| {
            if p.is_nan() {
                f64::NAN
            } else {
                ratio_or_zero((p - m).abs(), p + m) * 100.0
            }
        })
        .collect()
}

/// Lookback of [`adx`].
pub fn adx_lookback(period: usize) -> usize {
    2 * period - 1
}

/// Average Directional Movement Index: Wilder average of DX.
///
/// The first value is the mean of the first `period` DX values.
pub fn adx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let dx = dx(high, low, close, period);
    let len = dx.len();
    let mut result = nan_series(len);
    let start = adx_lookback(period);
    if len <= start {
        return result;
    }

    let n = period as f64;
    let mut value = dx[period..=start].iter().sum::<f64>() / n;
    result[start] = value;
    for i in start + 1..len {
        value = (value * (n - 1.0) + dx[i]) / n;
        result[i] = value;
    }
    result
}

/// Lookback of [`adxr`].
pub fn adxr_lookback(period: usize) -> usize {
    adx_lookback(period) + period - 1
}

/// Average Directional Movement Index Rating: mean of the current ADX and
/// the ADX `period - 1` bars earlier.
pub fn adxr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let adx = adx(high, low, close, period);
    let mut result = nan_series(adx.len());
    for i in adxr_lookback(period)..adx.len() {
        result[i] = (adx[i] + adx[i + 1 - period]) / 2.0;
    }
    result
}
