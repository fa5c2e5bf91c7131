//! On Balance Volume (OBV).
//!
//! Starts from the first bar's volume, then adds the volume on bars where
//! the price rises and subtracts it where the price falls.

/// On Balance Volume. Every bar is valid.
pub fn obv(price: &[f64], volume: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(price.len());
    let mut total = match volume.first() {
        Some(v) => *v,
        None => return result,
    };
    result.push(total);

    for i in 1..price.len() {
        if price[i] > price[i - 1] {
            total += volume[i];
        } else if price[i] < price[i - 1] {
            total -= volume[i];
        }
        result.push(total);
    }
    result
}
