//! Candle geometry and the averaged thresholds patterns compare against.

/// Borrowed open/high/low/close columns.
#[derive(Debug, Clone, Copy)]
pub struct Candles<'a> {
    /// Open prices.
    pub open: &'a [f64],
    /// High prices.
    pub high: &'a [f64],
    /// Low prices.
    pub low: &'a [f64],
    /// Close prices.
    pub close: &'a [f64],
}

impl<'a> Candles<'a> {
    /// Group four equally long columns.
    pub fn new(open: &'a [f64], high: &'a [f64], low: &'a [f64], close: &'a [f64]) -> Self {
        Self { open, high, low, close }
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether there are no bars.
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Absolute size of the real body.
    pub fn body(&self, i: usize) -> f64 {
        (self.close[i] - self.open[i]).abs()
    }

    /// High minus low.
    pub fn range(&self, i: usize) -> f64 {
        self.high[i] - self.low[i]
    }

    /// Top of the real body.
    pub fn body_top(&self, i: usize) -> f64 {
        self.open[i].max(self.close[i])
    }

    /// Bottom of the real body.
    pub fn body_bottom(&self, i: usize) -> f64 {
        self.open[i].min(self.close[i])
    }

    /// 1 for a white (rising) candle, -1 for a black one.
    pub fn color(&self, i: usize) -> i32 {
        if self.close[i] >= self.open[i] {
            1
        } else {
            -1
        }
    }
}

/// The candle measure a setting averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Real body size.
    RealBody,
    /// High-low range.
    HighLow,
}

/// A threshold: `factor` times the average `measure` over the `period` bars
/// before the one being tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleSetting {
    /// What to average.
    pub measure: Measure,
    /// How many preceding bars to average.
    pub period: usize,
    /// Multiplier applied to the average.
    pub factor: f64,
}

/// A body no larger than a tenth of the average range is a doji.
pub const BODY_DOJI: CandleSetting = CandleSetting {
    measure: Measure::HighLow,
    period: 10,
    factor: 0.1,
};

/// A body larger than the average body is long.
pub const BODY_LONG: CandleSetting = CandleSetting {
    measure: Measure::RealBody,
    period: 10,
    factor: 1.0,
};

/// A body no larger than the average body is short.
pub const BODY_SHORT: CandleSetting = CandleSetting {
    measure: Measure::RealBody,
    period: 10,
    factor: 1.0,
};

impl CandleSetting {
    /// Threshold for bar `i`. Requires `i >= self.period`.
    pub fn threshold(&self, candles: &Candles<'_>, i: usize) -> f64 {
        if self.period == 0 {
            return self.factor * self.measure_at(candles, i);
        }
        let total: f64 = (i - self.period..i).map(|j| self.measure_at(candles, j)).sum();
        self.factor * total / self.period as f64
    }

    fn measure_at(&self, candles: &Candles<'_>, i: usize) -> f64 {
        match self.measure {
            Measure::RealBody => candles.body(i),
            Measure::HighLow => candles.range(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometry() {
        let candles = Candles::new(&[10.0, 12.0], &[13.0, 12.5], &[9.0, 10.0], &[12.0, 11.0]);
        assert_eq!(candles.len(), 2);
        assert_relative_eq!(candles.body(0), 2.0);
        assert_relative_eq!(candles.range(1), 2.5);
        assert_eq!(candles.color(0), 1);
        assert_eq!(candles.color(1), -1);
        assert_relative_eq!(candles.body_top(1), 12.0);
        assert_relative_eq!(candles.body_bottom(1), 11.0);
    }

    #[test]
    fn test_threshold_averages_preceding_bars() {
        let open = [0.0; 3];
        let close = [1.0, 3.0, 100.0];
        let setting = CandleSetting {
            measure: Measure::RealBody,
            period: 2,
            factor: 0.5,
        };
        let candles = Candles::new(&open, &close, &open, &close);
        assert_relative_eq!(setting.threshold(&candles, 2), 1.0);
    }
}
