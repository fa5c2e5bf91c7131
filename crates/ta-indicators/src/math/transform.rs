//! Element-wise math transforms. Every bar is valid.

/// A unary transform on each element.
///
/// Inputs outside the function's domain, such as `Acos` above 1 or `Ln` of a
/// negative, yield NaN at that position. That NaN is a result, not warm-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unary {
    /// Arc cosine.
    Acos,
    /// Arc sine.
    Asin,
    /// Arc tangent.
    Atan,
    /// Ceiling.
    Ceil,
    /// Cosine.
    Cos,
    /// Hyperbolic cosine.
    Cosh,
    /// Natural exponent.
    Exp,
    /// Floor.
    Floor,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log10,
    /// Sine.
    Sin,
    /// Hyperbolic sine.
    Sinh,
    /// Square root.
    Sqrt,
    /// Tangent.
    Tan,
    /// Hyperbolic tangent.
    Tanh,
}

impl Unary {
    /// Apply to one value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Unary::Acos => x.acos(),
            Unary::Asin => x.asin(),
            Unary::Atan => x.atan(),
            Unary::Ceil => x.ceil(),
            Unary::Cos => x.cos(),
            Unary::Cosh => x.cosh(),
            Unary::Exp => x.exp(),
            Unary::Floor => x.floor(),
            Unary::Ln => x.ln(),
            Unary::Log10 => x.log10(),
            Unary::Sin => x.sin(),
            Unary::Sinh => x.sinh(),
            Unary::Sqrt => x.sqrt(),
            Unary::Tan => x.tan(),
            Unary::Tanh => x.tanh(),
        }
    }
}

/// Apply `op` to every element.
pub fn transform(data: &[f64], op: Unary) -> Vec<f64> {
    data.iter().map(|x| op.apply(*x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform() {
        let result = transform(&[1.0, 100.0], Unary::Log10);
        assert_relative_eq!(result[0], 0.0);
        assert_relative_eq!(result[1], 2.0);
        assert_eq!(transform(&[1.5], Unary::Floor), vec![1.0]);
        assert!(transform(&[-1.0], Unary::Sqrt)[0].is_nan());
    }
}
