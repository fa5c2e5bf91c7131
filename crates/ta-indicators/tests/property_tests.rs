//! Property-based tests for ta-indicators.
//!
//! These run every built-in kernel through the process-wide engine over
//! random OHLCV data and check the invariants callers rely on.

use proptest::prelude::*;
use ta_core::prelude::*;
use ta_indicators::Builtin;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Strategy for a realistic price level.
fn valid_price() -> impl Strategy<Value = f64> {
    1.0f64..10000.0
}

/// Strategy for a traded volume.
fn valid_volume() -> impl Strategy<Value = f64> {
    1.0f64..1_000_000.0
}

/// Strategy for a well-formed bar with a non-zero range.
fn valid_bar() -> impl Strategy<Value = Bar> {
    (
        valid_price(),
        -0.05f64..0.05,
        0.001f64..0.03,
        0.001f64..0.03,
        valid_volume(),
    )
        .prop_map(|(open, change, up, down, volume)| {
            let close = open * (1.0 + change);
            let high = open.max(close) * (1.0 + up);
            let low = open.min(close) * (1.0 - down);
            Bar::new(open, high, low, close, volume)
        })
}

/// Strategy for a series of bars.
fn valid_ohlcv(len: std::ops::Range<usize>) -> impl Strategy<Value = Ohlcv> {
    prop::collection::vec(valid_bar(), len).prop_map(|bars| bars.into_iter().collect())
}

// ============================================================================
// Helpers
// ============================================================================

fn run(indicator: Indicator, data: &Ohlcv) -> (CalcResult, Vec<SeriesBuf>) {
    ta_indicators::initialize().unwrap();
    match ta_indicators::calculate_ohlcv(indicator, data) {
        Ok(done) => done,
        Err(err) => panic!("{} failed: {err}", indicator.name()),
    }
}

fn floats(buffer: &SeriesBuf) -> &[f64] {
    buffer.as_slice::<f64>().unwrap()
}

fn supported() -> impl Iterator<Item = IndicatorKind> {
    IndicatorKind::ALL.iter().copied().filter(|kind| Builtin::supports(*kind))
}

fn assert_within(indicator: Indicator, data: &Ohlcv, min: f64, max: f64) {
    const EPSILON: f64 = 1e-9;
    let (result, buffers) = run(indicator, data);
    for buffer in &buffers {
        for (i, value) in floats(buffer)[result.range()].iter().enumerate() {
            assert!(
                *value >= min - EPSILON && *value <= max + EPSILON,
                "{} at {}: {value} outside [{min}, {max}]",
                indicator.name(),
                result.valid_start_index + i
            );
        }
    }
}

// ============================================================================
// Valid Range
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn valid_range_starts_at_lookback(data in valid_ohlcv(1..160)) {
        for kind in supported() {
            let indicator = kind.default_indicator();
            let lookback = ta_indicators::lookback(&indicator).unwrap();
            let (result, _) = run(indicator, &data);

            if lookback >= data.len() {
                prop_assert_eq!(result, CalcResult::default());
            } else {
                prop_assert_eq!(result.valid_start_index, lookback, "{}", kind.name());
                prop_assert_eq!(result.valid_count, data.len() - lookback, "{}", kind.name());
            }
        }
    }

    #[test]
    fn valid_values_are_finite_and_prefix_is_fill(data in valid_ohlcv(40..160)) {
        let kinds = supported().filter(|kind| kind.group() != Group::MathTransform);
        for kind in kinds {
            let (result, buffers) = run(kind.default_indicator(), &data);
            for buffer in &buffers {
                match buffer {
                    SeriesBuf::Float(values) => {
                        prop_assert!(values[..result.valid_start_index].iter().all(|v| v.is_nan()));
                        prop_assert!(
                            values[result.range()].iter().all(|v| v.is_finite()),
                            "{} produced a non-finite value", kind.name()
                        );
                    }
                    SeriesBuf::Int(values) => {
                        prop_assert!(values[..result.valid_start_index].iter().all(|v| *v == 0));
                    }
                    SeriesBuf::Bool(_) => {}
                }
            }
        }
    }
}

// ============================================================================
// Bounded Oscillators
// ============================================================================

proptest! {
    #[test]
    fn percent_oscillators_stay_in_range(data in valid_ohlcv(40..200)) {
        for kind in [
            IndicatorKind::Rsi,
            IndicatorKind::Mfi,
            IndicatorKind::Stoch,
            IndicatorKind::Stochf,
            IndicatorKind::Stochrsi,
            IndicatorKind::Ultosc,
            IndicatorKind::Aroon,
            IndicatorKind::Adx,
            IndicatorKind::PlusDi,
            IndicatorKind::MinusDi,
        ] {
            assert_within(kind.default_indicator(), &data, 0.0, 100.0);
        }
        assert_within(IndicatorKind::Willr.default_indicator(), &data, -100.0, 0.0);
        assert_within(IndicatorKind::Cmo.default_indicator(), &data, -100.0, 100.0);
        assert_within(IndicatorKind::Aroonosc.default_indicator(), &data, -100.0, 100.0);
        assert_within(IndicatorKind::Bop.default_indicator(), &data, -1.0, 1.0);
    }

    #[test]
    fn bands_are_ordered(data in valid_ohlcv(30..200)) {
        let (result, buffers) = run(IndicatorKind::Bbands.default_indicator(), &data);
        let (upper, middle, lower) = (floats(&buffers[0]), floats(&buffers[1]), floats(&buffers[2]));
        for i in result.range() {
            prop_assert!(lower[i] <= middle[i] + 1e-9 && middle[i] <= upper[i] + 1e-9);
        }
    }

    #[test]
    fn midpoint_lies_between_min_and_max(data in valid_ohlcv(30..200)) {
        let (result, minmax) = run(IndicatorKind::Minmax.default_indicator(), &data);
        let (_, midpoint) = run(Indicator::Midpoint { timeperiod: 30 }, &data);
        let (min, max, mid) = (floats(&minmax[0]), floats(&minmax[1]), floats(&midpoint[0]));
        for i in result.range() {
            prop_assert!(min[i] <= mid[i] + 1e-9 && mid[i] <= max[i] + 1e-9);
            prop_assert!((mid[i] - (min[i] + max[i]) / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn true_range_covers_bar_range(data in valid_ohlcv(2..100)) {
        let (result, buffers) = run(Indicator::Trange {}, &data);
        let tr = floats(&buffers[0]);
        for i in result.range() {
            prop_assert!(tr[i] >= data.high[i] - data.low[i] - 1e-9);
        }
    }

    #[test]
    fn sma_of_constant_is_constant(level in valid_price(), len in 30usize..120) {
        let data: Ohlcv = (0..len).map(|_| Bar::new(level, level, level, level, 1.0)).collect();
        let (result, buffers) = run(Indicator::Sma { timeperiod: 30 }, &data);
        for value in &floats(&buffers[0])[result.range()] {
            prop_assert!((value - level).abs() <= level * 1e-9);
        }
    }
}
