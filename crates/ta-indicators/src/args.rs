//! Argument checks shared by the dispatch table.

use ta_core::{Element, Input, Output, RetCode};

/// Largest period accepted by any routine.
pub(crate) const MAX_PERIOD: u32 = 100_000;

/// Validate an integer period against `[min, MAX_PERIOD]`.
pub(crate) fn period(value: u32, min: u32) -> Result<usize, RetCode> {
    if (min..=MAX_PERIOD).contains(&value) {
        Ok(value as usize)
    } else {
        Err(RetCode::BadParam)
    }
}

/// Validate a float parameter against an inclusive range.
pub(crate) fn real_in(value: f64, min: f64, max: f64) -> Result<f64, RetCode> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(RetCode::BadParam)
    }
}

/// The float input at `index`.
pub(crate) fn real<'a>(inputs: &[Input<'a>], index: usize) -> Result<&'a [f64], RetCode> {
    inputs
        .get(index)
        .and_then(|input| input.as_slice::<f64>())
        .ok_or(RetCode::InputNotAllInitialize)
}

/// All `N` outputs as slices of `T`.
pub(crate) fn outs<'o, T: Element, const N: usize>(
    outputs: &'o mut [Output<'_>],
) -> Result<[&'o mut [T]; N], RetCode> {
    let slices = outputs
        .iter_mut()
        .map(|output| output.as_mut_slice::<T>().ok_or(RetCode::OutputNotAllInitialize))
        .collect::<Result<Vec<_>, _>>()?;
    slices.try_into().map_err(|_| RetCode::OutputNotAllInitialize)
}

/// Copy the end of a full-length series into an output that starts at the
/// first valid position. Returns the number of values written.
pub(crate) fn emit<T: Copy>(full: &[T], out: &mut [T]) -> usize {
    let n = out.len().min(full.len());
    let start = full.len() - n;
    out[..n].copy_from_slice(&full[start..]);
    n
}

/// Emit one series per output, in order.
pub(crate) fn emit_all<T: Element, const N: usize>(
    outputs: &mut [Output<'_>],
    series: [Vec<T>; N],
) -> Result<usize, RetCode> {
    let outs = outs::<T, N>(outputs)?;
    let mut written = 0;
    for (full, out) in series.iter().zip(outs) {
        written = emit(full, out);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_bounds() {
        assert_eq!(period(2, 2), Ok(2));
        assert_eq!(period(1, 2), Err(RetCode::BadParam));
        assert_eq!(period(MAX_PERIOD + 1, 1), Err(RetCode::BadParam));
    }

    #[test]
    fn test_emit_takes_tail() {
        let mut out = [0.0; 2];
        assert_eq!(emit(&[1.0, 2.0, 3.0], &mut out), 2);
        assert_eq!(out, [2.0, 3.0]);
    }

    #[test]
    fn test_outs_checks_kind_and_count() {
        let mut a = vec![0.0; 3];
        let mut b = vec![0_i32; 3];
        let mut outputs = [Output::from(&mut a), Output::from(&mut b)];

        assert!(outs::<f64, 2>(&mut outputs).is_err());
        assert!(outs::<f64, 1>(&mut outputs[..1]).is_ok());
        assert!(outs::<i32, 1>(&mut outputs[1..]).is_ok());
    }

    #[test]
    fn test_real_input() {
        let data = [1.0, 2.0];
        let ints = [1, 2];
        let inputs = [Input::from(&data[..]), Input::from(&ints[..])];
        assert_eq!(real(&inputs, 0), Ok(&data[..]));
        assert_eq!(real(&inputs, 1), Err(RetCode::InputNotAllInitialize));
        assert_eq!(real(&inputs, 2), Err(RetCode::InputNotAllInitialize));
    }
}
