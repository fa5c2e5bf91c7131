//! Candlestick pattern recognition.
//!
//! Each function returns one integer per bar: 0 for no pattern, positive for
//! a bullish signal and negative for a bearish one. 100 is a full match and
//! 80 a weaker one.

pub mod candle;

use candle::{CandleSetting, Candles, BODY_DOJI, BODY_LONG, BODY_SHORT};

/// Lookback of [`doji`].
pub fn doji_lookback() -> usize {
    BODY_DOJI.period
}

fn is_doji(candles: &Candles<'_>, i: usize) -> bool {
    candles.body(i) <= BODY_DOJI.threshold(candles, i)
}

/// Doji: open and close practically equal.
pub fn doji(candles: &Candles<'_>) -> Vec<i32> {
    let mut result = vec![0; candles.len()];
    for i in doji_lookback()..candles.len() {
        if is_doji(candles, i) {
            result[i] = 100;
        }
    }
    result
}

/// Lookback of [`engulfing`].
pub fn engulfing_lookback() -> usize {
    2
}

/// Engulfing: a candle whose body covers the opposite-colored body before it.
pub fn engulfing(candles: &Candles<'_>) -> Vec<i32> {
    let (open, close) = (candles.open, candles.close);
    let mut result = vec![0; candles.len()];
    for i in engulfing_lookback()..candles.len() {
        let bullish = candles.color(i) == 1
            && candles.color(i - 1) == -1
            && close[i] > open[i - 1]
            && open[i] < close[i - 1];
        let bearish = candles.color(i) == -1
            && candles.color(i - 1) == 1
            && open[i] > close[i - 1]
            && close[i] < open[i - 1];
        if bullish || bearish {
            result[i] = candles.color(i) * 100;
        }
    }
    result
}

fn lookback_after(second: CandleSetting) -> usize {
    second.period.max(BODY_LONG.period) + 1
}

/// Lookback of [`harami`].
pub fn harami_lookback() -> usize {
    lookback_after(BODY_SHORT)
}

/// Lookback of [`harami_cross`].
pub fn harami_cross_lookback() -> usize {
    lookback_after(BODY_DOJI)
}

/// Score a long candle followed by a `second` candle held within its body.
fn contained(candles: &Candles<'_>, i: usize, second: impl Fn(usize) -> bool) -> i32 {
    if candles.body(i - 1) <= BODY_LONG.threshold(candles, i - 1) || !second(i) {
        return 0;
    }
    let (top, bottom) = (candles.body_top(i), candles.body_bottom(i));
    let (outer_top, outer_bottom) = (candles.body_top(i - 1), candles.body_bottom(i - 1));
    let direction = -candles.color(i - 1);
    if top < outer_top && bottom > outer_bottom {
        direction * 100
    } else if top <= outer_top && bottom >= outer_bottom {
        direction * 80
    } else {
        0
    }
}

/// Harami: a long candle followed by a short one inside its body.
pub fn harami(candles: &Candles<'_>) -> Vec<i32> {
    let mut result = vec![0; candles.len()];
    for i in harami_lookback()..candles.len() {
        result[i] = contained(candles, i, |j| candles.body(j) <= BODY_SHORT.threshold(candles, j));
    }
    result
}

/// Harami Cross: a long candle followed by a doji inside its body.
pub fn harami_cross(candles: &Candles<'_>) -> Vec<i32> {
    let mut result = vec![0; candles.len()];
    for i in harami_cross_lookback()..candles.len() {
        result[i] = contained(candles, i, |j| is_doji(candles, j));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten quiet bars of body 1 and range 2, then the bars under test.
    fn series(tail: &[(f64, f64, f64, f64)]) -> [Vec<f64>; 4] {
        let mut columns: [Vec<f64>; 4] = Default::default();
        let quiet = (0..10).map(|_| (10.0, 11.5, 9.5, 11.0));
        for (o, h, l, c) in quiet.chain(tail.iter().copied()) {
            columns[0].push(o);
            columns[1].push(h);
            columns[2].push(l);
            columns[3].push(c);
        }
        columns
    }

    fn candles(columns: &[Vec<f64>; 4]) -> Candles<'_> {
        Candles::new(&columns[0], &columns[1], &columns[2], &columns[3])
    }

    #[test]
    fn test_doji() {
        let columns = series(&[(10.0, 11.0, 9.0, 10.05), (10.0, 11.0, 9.0, 10.5)]);
        let result = doji(&candles(&columns));
        assert_eq!(result[10], 100);
        assert_eq!(result[11], 0);
        assert!(result[..10].iter().all(|v| *v == 0));
    }

    #[test]
    fn test_engulfing() {
        let columns = series(&[(11.0, 11.5, 9.5, 10.0), (9.5, 12.0, 9.0, 11.5)]);
        let result = engulfing(&candles(&columns));
        assert_eq!(result[11], 100);

        let columns = series(&[(10.0, 11.5, 9.5, 11.0), (11.5, 12.0, 9.0, 9.5)]);
        assert_eq!(engulfing(&candles(&columns))[11], -100);
    }

    #[test]
    fn test_harami() {
        // Long black candle, then a small white one strictly inside it.
        let columns = series(&[(14.0, 14.5, 9.5, 10.0), (11.0, 12.5, 10.5, 11.5)]);
        assert_eq!(harami(&candles(&columns))[11], 100);

        // Same, but the small body touches the long body's bottom.
        let columns = series(&[(14.0, 14.5, 9.5, 10.0), (10.0, 12.5, 9.8, 10.5)]);
        assert_eq!(harami(&candles(&columns))[11], 80);

        // Long white candle, then a doji inside it.
        let columns = series(&[(10.0, 14.5, 9.5, 14.0), (12.0, 12.5, 11.5, 12.05)]);
        assert_eq!(harami_cross(&candles(&columns))[11], -100);
    }
}
