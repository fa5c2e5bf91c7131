//! Common test utilities for the workspace scenarios.
//!
//! Float comparison with magnitude-aware tolerance and synthetic OHLCV
//! generators.

#![allow(dead_code)]

use ta_core::{Bar, Ohlcv};

/// Tiered float comparison.
///
/// - NaN only matches NaN, infinities match by sign
/// - values near zero (|expected| < 1e-10) use absolute tolerance
/// - everything else uses relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");

    if expected.is_infinite() {
        assert!(
            actual.is_infinite() && actual.signum() == expected.signum(),
            "{context}: expected {expected} but got {actual}"
        );
        return;
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(diff < epsilon, "{context}: expected {expected} but got {actual} (diff: {diff})");
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Assert two series are equal element-wise with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Linear series `start, start + step, ...`.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Sine wave around `center`.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Random walk from a seeded LCG; identical seeds give identical series.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut step = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + step() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

/// Bars around `close`: each opens at the previous close and spans
/// `range_pct` of its close beyond the body.
pub fn ohlcv_from_close(close: &[f64], range_pct: f64) -> Ohlcv {
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let range = c * range_pct;
            let o = if i == 0 { c } else { close[i - 1] };
            let h = c.max(o) + range * 0.5;
            let l = c.min(o) - range * 0.5;
            Bar::new(o, h, l, c, 1000.0 + i as f64 * 100.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_linear() {
        assert_eq!(generate_linear(100.0, 1.0, 3), vec![100.0, 101.0, 102.0]);
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(a, generate_random_walk(100.0, 1.0, 10, 12345));
        assert!(a.iter().all(|p| *p > 0.0));
    }

    #[test]
    fn test_ohlcv_from_close_is_well_formed() {
        let data = ohlcv_from_close(&generate_sine(50.0, 5.0, 20, 40), 0.02);
        assert_eq!(data.len(), 40);
        assert!((0..data.len()).all(|i| data.get(i).is_some_and(|bar| bar.is_valid())));
    }
}
