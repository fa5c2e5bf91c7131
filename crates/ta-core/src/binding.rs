//! Binding caller buffers to an indicator's shape.
//!
//! [`bind`] is the only way to obtain a [`BoundCall`], so every call that
//! reaches the engine has already been checked for arity, element kind and
//! length against the indicator's [`ShapeDescriptor`].
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. input count, 2. output count,
//! 3. input kinds, 4. output kinds,
//! 5. input lengths, 6. output lengths.
//!
//! Every length is compared to the length of the first input.
//!
//! # Example
//!
//! ```rust
//! use ta_core::{bind, Indicator, Input, Output};
//!
//! let close: Vec<f64> = (1..=10).map(f64::from).collect();
//! let mut out = vec![0.0; 10];
//!
//! let call = bind(
//!     Indicator::Sma { timeperiod: 3 },
//!     [Input::from(&close)],
//!     [Output::from(&mut out)],
//! )
//! .unwrap();
//! assert_eq!(call.len(), 10);
//! ```

use crate::catalogue::Indicator;
use crate::error::{BindError, BindResult, Side};
use crate::kind::ElementKind;
use crate::series::{Input, Output};
use crate::shape::ShapeDescriptor;

/// An indicator together with buffers verified against its shape.
///
/// Opaque: construct it with [`bind`].
#[derive(Debug)]
pub struct BoundCall<'a> {
    pub(crate) indicator: Indicator,
    pub(crate) inputs: Vec<Input<'a>>,
    pub(crate) outputs: Vec<Output<'a>>,
    pub(crate) len: usize,
}

impl<'a> BoundCall<'a> {
    /// The indicator to compute.
    #[must_use]
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    /// Common length of every bound series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bound series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bound inputs, in shape order.
    #[must_use]
    pub fn inputs(&self) -> &[Input<'a>] {
        &self.inputs
    }

    /// Re-run the shape checks on the held buffers.
    ///
    /// Returns the checked common length, which differs from [`len`](Self::len)
    /// only if the call was altered after binding.
    pub(crate) fn verify(&self) -> BindResult<usize> {
        check(self.indicator.shape(), &self.inputs, &self.outputs)
    }
}

/// Check `inputs` and `outputs` against the shape of `indicator`.
///
/// # Errors
///
/// Returns the first [`BindError`] found, in the documented check order.
pub fn bind<'a, I, O>(indicator: Indicator, inputs: I, outputs: O) -> BindResult<BoundCall<'a>>
where
    I: IntoIterator<Item = Input<'a>>,
    O: IntoIterator<Item = Output<'a>>,
{
    let inputs: Vec<_> = inputs.into_iter().collect();
    let outputs: Vec<_> = outputs.into_iter().collect();
    let len = check(indicator.shape(), &inputs, &outputs)?;

    Ok(BoundCall {
        indicator,
        inputs,
        outputs,
        len,
    })
}

fn check(shape: &ShapeDescriptor, inputs: &[Input<'_>], outputs: &[Output<'_>]) -> BindResult<usize> {
    check_arity(Side::Input, shape.input_arity(), inputs.len())?;
    check_arity(Side::Output, shape.output_arity(), outputs.len())?;

    check_kinds(Side::Input, shape.input_kinds(), inputs.iter().map(Input::kind))?;
    check_kinds(Side::Output, shape.output_kinds(), outputs.iter().map(Output::kind))?;

    // Every shape has at least one input, so arity success implies inputs[0].
    let len = inputs.first().map_or(0, Input::len);
    check_lengths(Side::Input, len, inputs.iter().map(Input::len))?;
    check_lengths(Side::Output, len, outputs.iter().map(Output::len))?;

    Ok(len)
}

fn check_arity(side: Side, expected: usize, actual: usize) -> BindResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BindError::ArityMismatch {
            side,
            expected,
            actual,
        })
    }
}

fn check_kinds(
    side: Side,
    expected: impl Iterator<Item = ElementKind>,
    actual: impl Iterator<Item = ElementKind>,
) -> BindResult<()> {
    for (position, (expected, actual)) in expected.zip(actual).enumerate() {
        if expected != actual {
            return Err(BindError::KindMismatch {
                side,
                position,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn check_lengths(side: Side, expected: usize, actual: impl Iterator<Item = usize>) -> BindResult<()> {
    for (position, actual) in actual.enumerate() {
        if actual != expected {
            return Err(BindError::LengthMismatch {
                side,
                position,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MaType;

    fn stoch() -> Indicator {
        Indicator::Stoch {
            fastk_period: 5,
            slowk_period: 3,
            slowk_matype: MaType::Sma,
            slowd_period: 3,
            slowd_matype: MaType::Sma,
        }
    }

    #[test]
    fn test_bind_success() {
        let close = vec![1.0; 8];
        let mut out = vec![0.0; 8];
        let call = bind(
            Indicator::Sma { timeperiod: 3 },
            [Input::from(&close)],
            [Output::from(&mut out)],
        )
        .unwrap();
        assert_eq!(call.len(), 8);
        assert_eq!(call.inputs().len(), 1);
        assert_eq!(call.verify(), Ok(8));
    }

    #[test]
    fn test_verify_reports_current_length() {
        let close = vec![1.0; 8];
        let short = vec![1.0; 5];
        let mut out = vec![0.0; 8];
        let mut call = bind(
            Indicator::Sma { timeperiod: 3 },
            [Input::from(&close)],
            [Output::from(&mut out)],
        )
        .unwrap();

        call.inputs[0] = Input::from(&short);
        assert_eq!(
            call.verify(),
            Err(BindError::LengthMismatch {
                side: Side::Output,
                position: 0,
                expected: 5,
                actual: 8
            })
        );
    }

    #[test]
    fn test_input_arity_reported_first() {
        let close = vec![1.0; 8];
        let mut out = vec![0.0; 3];
        let err = bind(stoch(), [Input::from(&close)], [Output::from(&mut out)]).unwrap_err();
        assert_eq!(
            err,
            BindError::ArityMismatch {
                side: Side::Input,
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn test_output_arity() {
        let (h, l, c) = (vec![1.0; 4], vec![1.0; 4], vec![1.0; 4]);
        let mut k = vec![0.0; 4];
        let err = bind(
            stoch(),
            [Input::from(&h), Input::from(&l), Input::from(&c)],
            [Output::from(&mut k)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::ArityMismatch {
                side: Side::Output,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_kind_mismatch_before_length() {
        let ints = vec![1_i32; 4];
        let mut out = vec![0.0; 2];
        let err = bind(
            Indicator::Sma { timeperiod: 3 },
            [Input::from(&ints)],
            [Output::from(&mut out)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::KindMismatch {
                side: Side::Input,
                position: 0,
                expected: ElementKind::Float,
                actual: ElementKind::Int
            }
        );

        let o = vec![1.0; 4];
        let mut floats = vec![0.0; 4];
        let err = bind(
            Indicator::CdlDoji {},
            [Input::from(&o), Input::from(&o), Input::from(&o), Input::from(&o)],
            [Output::from(&mut floats)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::KindMismatch {
                side: Side::Output,
                position: 0,
                expected: ElementKind::Int,
                actual: ElementKind::Float
            }
        );
    }

    #[test]
    fn test_length_mismatch_positions() {
        let h = vec![1.0; 5];
        let l = vec![1.0; 4];
        let mut k = vec![0.0; 5];
        let mut d = vec![0.0; 5];
        let err = bind(
            stoch(),
            [Input::from(&h), Input::from(&l), Input::from(&h)],
            [Output::from(&mut k), Output::from(&mut d)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::LengthMismatch {
                side: Side::Input,
                position: 1,
                expected: 5,
                actual: 4
            }
        );

        let mut short = vec![0.0; 3];
        let err = bind(
            stoch(),
            [Input::from(&h), Input::from(&h), Input::from(&h)],
            [Output::from(&mut k), Output::from(&mut short)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BindError::LengthMismatch {
                side: Side::Output,
                position: 1,
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn test_bind_allocated_outputs() {
        let close = vec![1.0; 6];
        let indicator = Indicator::Minmaxindex { timeperiod: 3 };
        let mut bufs = indicator.shape().allocate_outputs(close.len());
        let call = bind(
            indicator,
            [Input::from(&close)],
            bufs.iter_mut().map(|b| b.as_output()),
        );
        assert!(call.is_ok());
    }
}
