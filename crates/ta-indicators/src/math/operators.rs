//! Element-wise arithmetic on two series, and rolling window operators.

use crate::utils::{self, rolling_argmax, rolling_argmin};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
    /// `a * b`.
    Mult,
    /// `a / b`; IEEE semantics on a zero divisor.
    Div,
}

/// Combine two series element by element.
pub fn binary(a: &[f64], b: &[f64], op: Binary) -> Vec<f64> {
    a.iter()
        .zip(b)
        .map(|(a, b)| match op {
            Binary::Add => a + b,
            Binary::Sub => a - b,
            Binary::Mult => a * b,
            Binary::Div => a / b,
        })
        .collect()
}

/// Lookback of the rolling operators.
pub fn rolling_lookback(period: usize) -> usize {
    period - 1
}

/// Highest value over `period`.
pub fn max(data: &[f64], period: usize) -> Vec<f64> {
    utils::rolling_max(data, period)
}

/// Lowest value over `period`.
pub fn min(data: &[f64], period: usize) -> Vec<f64> {
    utils::rolling_min(data, period)
}

/// Sum over `period`.
pub fn sum(data: &[f64], period: usize) -> Vec<f64> {
    utils::rolling_sum(data, period)
}

fn absolute(positions: Vec<Option<usize>>) -> Vec<i32> {
    positions
        .into_iter()
        .map(|p| p.and_then(|j| i32::try_from(j).ok()).unwrap_or(0))
        .collect()
}

/// Absolute index of the highest value over `period`; zero in the warm-up.
pub fn maxindex(data: &[f64], period: usize) -> Vec<i32> {
    absolute(rolling_argmax(data, period))
}

/// Absolute index of the lowest value over `period`; zero in the warm-up.
pub fn minindex(data: &[f64], period: usize) -> Vec<i32> {
    absolute(rolling_argmin(data, period))
}

/// Midpoint: `(highest + lowest) / 2` over `period`.
pub fn midpoint(data: &[f64], period: usize) -> Vec<f64> {
    let high = max(data, period);
    let low = min(data, period);
    high.iter().zip(&low).map(|(h, l)| (h + l) / 2.0).collect()
}

/// Midpoint price: `(highest high + lowest low) / 2` over `period`.
pub fn midprice(high: &[f64], low: &[f64], period: usize) -> Vec<f64> {
    let highest = max(high, period);
    let lowest = min(low, period);
    highest.iter().zip(&lowest).map(|(h, l)| (h + l) / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary() {
        let a = [6.0, 1.0];
        let b = [3.0, 0.0];
        assert_eq!(binary(&a, &b, Binary::Add), vec![9.0, 1.0]);
        assert_eq!(binary(&a, &b, Binary::Sub), vec![3.0, 1.0]);
        assert_eq!(binary(&a, &b, Binary::Mult), vec![18.0, 0.0]);
        assert_eq!(binary(&a, &b, Binary::Div)[0], 2.0);
        assert!(binary(&a, &b, Binary::Div)[1].is_infinite());
    }

    #[test]
    fn test_rolling_operators() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert!(max(&data, 3)[1].is_nan());
        assert_eq!(max(&data, 3)[2..], [4.0, 4.0, 5.0]);
        assert_eq!(min(&data, 3)[2..], [1.0, 1.0, 1.0]);
        assert_eq!(sum(&data, 3)[4], 10.0);
        assert_eq!(maxindex(&data, 3), vec![0, 0, 2, 2, 4]);
        assert_eq!(minindex(&data, 3), vec![0, 0, 1, 3, 3]);
        assert_eq!(midpoint(&data, 3)[4], 3.0);
        assert_eq!(midprice(&data, &data, 3)[3], 2.5);
    }
}
