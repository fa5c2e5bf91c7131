//! OHLCV (Open, High, Low, Close, Volume) price data.
//!
//! [`Bar`] is one period with the candle geometry the pattern routines use.
//! [`Ohlcv`] stores bars column-wise so each column can be bound directly as
//! an indicator input.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::series::Input;
use crate::shape::{InputRole, ShapeDescriptor};

/// A single OHLCV price bar.
///
/// # Example
///
/// ```rust
/// use ta_core::Bar;
///
/// let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert!(bar.is_valid());
/// assert_eq!(bar.body(), 3.0);
/// assert_eq!(bar.upper_shadow(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar {
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Create a bar.
    #[must_use]
    pub const fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// `low <= open, close <= high` and non-negative volume.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.low <= self.high
            && (self.low..=self.high).contains(&self.open)
            && (self.low..=self.high).contains(&self.close)
            && self.volume >= 0.0
    }

    /// High minus low.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Absolute distance between open and close.
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Close above open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Close below open.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Top of the body.
    #[must_use]
    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Bottom of the body.
    #[must_use]
    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    /// High minus the top of the body.
    #[must_use]
    pub fn upper_shadow(&self) -> f64 {
        self.high - self.body_top()
    }

    /// Bottom of the body minus low.
    #[must_use]
    pub fn lower_shadow(&self) -> f64 {
        self.body_bottom() - self.low
    }
}

/// Column-oriented OHLCV series.
///
/// Columns are expected to share one length; [`Ohlcv::is_aligned`] checks
/// it, and binding rejects misaligned columns anyway.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ohlcv {
    /// Opening prices.
    #[cfg_attr(feature = "serde", serde(default))]
    pub open: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Closing prices.
    pub close: Vec<f64>,
    /// Traded volume.
    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: Vec<f64>,
}

impl Ohlcv {
    /// Empty series with room for `capacity` bars.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
        }
    }

    /// Number of bars, taken from the close column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Whether every column has the same length.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        let n = self.len();
        [&self.open, &self.high, &self.low, &self.volume]
            .iter()
            .all(|column| column.len() == n)
    }

    /// Append a bar.
    pub fn push(&mut self, bar: Bar) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
    }

    /// Bar at `index`, if every column reaches it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar> {
        Some(Bar::new(
            *self.open.get(index)?,
            *self.high.get(index)?,
            *self.low.get(index)?,
            *self.close.get(index)?,
            *self.volume.get(index)?,
        ))
    }

    /// Column feeding an input role.
    ///
    /// Generic single-series roles read the close; the second operand of a
    /// two-series function reads the open.
    #[must_use]
    pub fn column(&self, role: InputRole) -> &[f64] {
        match role {
            InputRole::Open | InputRole::Real1 => &self.open,
            InputRole::High => &self.high,
            InputRole::Low => &self.low,
            InputRole::Close | InputRole::Real | InputRole::Real0 | InputRole::Periods => &self.close,
            InputRole::Volume => &self.volume,
        }
    }

    /// Inputs for `shape`, in shape order.
    #[must_use]
    pub fn inputs_for(&self, shape: &ShapeDescriptor) -> Vec<Input<'_>> {
        shape
            .inputs
            .iter()
            .map(|input| Input::Float(self.column(input.role)))
            .collect()
    }
}

impl FromIterator<Bar> for Ohlcv {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        let mut ohlcv = Ohlcv::default();
        for bar in iter {
            ohlcv.push(bar);
        }
        ohlcv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::IndicatorKind;
    use approx::assert_relative_eq;

    fn sample() -> Ohlcv {
        vec![
            Bar::new(10.0, 12.0, 9.0, 11.0, 100.0),
            Bar::new(11.0, 13.0, 10.0, 10.5, 150.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_bar_geometry() {
        let bar = Bar::new(11.0, 13.0, 10.0, 10.5, 150.0);
        assert!(bar.is_valid());
        assert!(bar.is_bearish());
        assert_relative_eq!(bar.body(), 0.5);
        assert_relative_eq!(bar.upper_shadow(), 2.0);
        assert_relative_eq!(bar.lower_shadow(), 0.5);
        assert_relative_eq!(bar.range(), 3.0);

        assert!(!Bar::new(10.0, 9.0, 11.0, 10.0, 0.0).is_valid());
    }

    #[test]
    fn test_columns() {
        let data = sample();
        assert_eq!(data.len(), 2);
        assert!(data.is_aligned());
        assert_eq!(data.get(1), Some(Bar::new(11.0, 13.0, 10.0, 10.5, 150.0)));
        assert_eq!(data.get(2), None);
        assert_eq!(data.column(InputRole::Real), &[11.0, 10.5]);
        assert_eq!(data.column(InputRole::Real1), &[10.0, 11.0]);
    }

    #[test]
    fn test_inputs_for_shape() {
        let data = sample();
        let inputs = data.inputs_for(IndicatorKind::Stoch.shape());
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0], Input::Float(&[12.0, 13.0]));
        assert_eq!(inputs[2], Input::Float(&[11.0, 10.5]));
    }

    #[test]
    fn test_misaligned() {
        let mut data = sample();
        data.volume.pop();
        assert!(!data.is_aligned());
        assert_eq!(data.get(1), None);
    }
}
