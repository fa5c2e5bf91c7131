//! Kind-tagged views over caller buffers.
//!
//! [`Input`] and [`Output`] borrow caller memory and record its element
//! kind, so a list of heterogeneous series can be checked against a
//! [`ShapeDescriptor`](crate::ShapeDescriptor) before any computation runs.
//! [`SeriesBuf`] is the owned counterpart used by callers that let the
//! library allocate outputs.
//!
//! # Example
//!
//! ```rust
//! use ta_core::{ElementKind, Input, SeriesBuf};
//!
//! let close = vec![1.0, 2.0, 3.0];
//! let input = Input::from(close.as_slice());
//! assert_eq!(input.kind(), ElementKind::Float);
//!
//! let mut buf = SeriesBuf::for_kind(ElementKind::Int, 3);
//! assert_eq!(buf.as_output().len(), 3);
//! ```

use core::ops::Range;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::kind::ElementKind;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for bool {}
}

/// Element types a series may hold: `f64`, `i32` or `bool`.
///
/// Sealed; the set of kinds is fixed by [`ElementKind`].
pub trait Element: Copy + Send + Sync + sealed::Sealed + 'static {
    /// Kind tag of this element type.
    const KIND: ElementKind;

    /// Value written into positions that hold no result.
    const FILL: Self;

    #[doc(hidden)]
    fn wrap_input(slice: &[Self]) -> Input<'_>;

    #[doc(hidden)]
    fn wrap_output(slice: &mut [Self]) -> Output<'_>;

    #[doc(hidden)]
    fn wrap_buf(values: Vec<Self>) -> SeriesBuf;

    #[doc(hidden)]
    fn unwrap_input<'a>(input: &Input<'a>) -> Option<&'a [Self]>;

    #[doc(hidden)]
    fn unwrap_output<'b>(output: &'b mut Output<'_>) -> Option<&'b mut [Self]>;

    #[doc(hidden)]
    fn unwrap_buf(buf: &SeriesBuf) -> Option<&[Self]>;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident, $fill:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;
            const FILL: Self = $fill;

            fn wrap_input(slice: &[Self]) -> Input<'_> {
                Input::$variant(slice)
            }

            fn wrap_output(slice: &mut [Self]) -> Output<'_> {
                Output::$variant(slice)
            }

            fn wrap_buf(values: Vec<Self>) -> SeriesBuf {
                SeriesBuf::$variant(values)
            }

            fn unwrap_input<'a>(input: &Input<'a>) -> Option<&'a [Self]> {
                match *input {
                    Input::$variant(slice) => Some(slice),
                    _ => None,
                }
            }

            fn unwrap_output<'b>(output: &'b mut Output<'_>) -> Option<&'b mut [Self]> {
                match output {
                    Output::$variant(slice) => Some(&mut **slice),
                    _ => None,
                }
            }

            fn unwrap_buf(buf: &SeriesBuf) -> Option<&[Self]> {
                match buf {
                    SeriesBuf::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_element!(f64, Float, f64::NAN);
impl_element!(i32, Int, 0);
impl_element!(bool, Bool, false);

/// A borrowed, read-only input series tagged with its element kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input<'a> {
    /// Float series.
    Float(&'a [f64]),
    /// Integer series.
    Int(&'a [i32]),
    /// Boolean series.
    Bool(&'a [bool]),
}

impl<'a> Input<'a> {
    /// Element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Input::Float(_) => ElementKind::Float,
            Input::Int(_) => ElementKind::Int,
            Input::Bool(_) => ElementKind::Bool,
        }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Input::Float(s) => s.len(),
            Input::Int(s) => s.len(),
            Input::Bool(s) => s.len(),
        }
    }

    /// Whether the series is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying slice, if it holds `T`.
    #[must_use]
    pub fn as_slice<T: Element>(&self) -> Option<&'a [T]> {
        T::unwrap_input(self)
    }
}

impl<'a, T: Element> From<&'a [T]> for Input<'a> {
    fn from(slice: &'a [T]) -> Self {
        T::wrap_input(slice)
    }
}

impl<'a, T: Element> From<&'a Vec<T>> for Input<'a> {
    fn from(values: &'a Vec<T>) -> Self {
        T::wrap_input(values)
    }
}

/// A borrowed, writable output series tagged with its element kind.
#[derive(Debug, PartialEq)]
pub enum Output<'a> {
    /// Float series.
    Float(&'a mut [f64]),
    /// Integer series.
    Int(&'a mut [i32]),
    /// Boolean series.
    Bool(&'a mut [bool]),
}

impl<'a> Output<'a> {
    /// Element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Output::Float(_) => ElementKind::Float,
            Output::Int(_) => ElementKind::Int,
            Output::Bool(_) => ElementKind::Bool,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Output::Float(s) => s.len(),
            Output::Int(s) => s.len(),
            Output::Bool(s) => s.len(),
        }
    }

    /// Whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying slice, if it holds `T`.
    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        T::unwrap_output(self)
    }

    /// Shorter-lived view of the same buffer.
    pub fn reborrow(&mut self) -> Output<'_> {
        match self {
            Output::Float(s) => Output::Float(&mut **s),
            Output::Int(s) => Output::Int(&mut **s),
            Output::Bool(s) => Output::Bool(&mut **s),
        }
    }

    /// View of the elements from `from` to the end.
    ///
    /// Returns `None` when `from` is past the end.
    pub fn tail(&mut self, from: usize) -> Option<Output<'_>> {
        Some(match self {
            Output::Float(s) => Output::Float(s.get_mut(from..)?),
            Output::Int(s) => Output::Int(s.get_mut(from..)?),
            Output::Bool(s) => Output::Bool(s.get_mut(from..)?),
        })
    }

    /// Fill every element with the kind's fill value.
    pub fn clear(&mut self) {
        match self {
            Output::Float(s) => s.fill(f64::FILL),
            Output::Int(s) => s.fill(i32::FILL),
            Output::Bool(s) => s.fill(bool::FILL),
        }
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Output<'a> {
    fn from(slice: &'a mut [T]) -> Self {
        T::wrap_output(slice)
    }
}

impl<'a, T: Element> From<&'a mut Vec<T>> for Output<'a> {
    fn from(values: &'a mut Vec<T>) -> Self {
        T::wrap_output(values)
    }
}

/// An owned series of one element kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SeriesBuf {
    /// Float series.
    Float(Vec<f64>),
    /// Integer series.
    Int(Vec<i32>),
    /// Boolean series.
    Bool(Vec<bool>),
}

impl SeriesBuf {
    /// A buffer of `len` fill values (`NaN`, `0` or `false`).
    #[must_use]
    pub fn for_kind(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::Float => SeriesBuf::Float(vec![f64::FILL; len]),
            ElementKind::Int => SeriesBuf::Int(vec![i32::FILL; len]),
            ElementKind::Bool => SeriesBuf::Bool(vec![bool::FILL; len]),
        }
    }

    /// Element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            SeriesBuf::Float(_) => ElementKind::Float,
            SeriesBuf::Int(_) => ElementKind::Int,
            SeriesBuf::Bool(_) => ElementKind::Bool,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SeriesBuf::Float(v) => v.len(),
            SeriesBuf::Int(v) => v.len(),
            SeriesBuf::Bool(v) => v.len(),
        }
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view.
    #[must_use]
    pub fn as_input(&self) -> Input<'_> {
        match self {
            SeriesBuf::Float(v) => Input::Float(v.as_slice()),
            SeriesBuf::Int(v) => Input::Int(v.as_slice()),
            SeriesBuf::Bool(v) => Input::Bool(v.as_slice()),
        }
    }

    /// Writable view.
    pub fn as_output(&mut self) -> Output<'_> {
        match self {
            SeriesBuf::Float(v) => Output::Float(v.as_mut_slice()),
            SeriesBuf::Int(v) => Output::Int(v.as_mut_slice()),
            SeriesBuf::Bool(v) => Output::Bool(v.as_mut_slice()),
        }
    }

    /// The values, if they are `T`.
    #[must_use]
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::unwrap_buf(self)
    }

    /// Copy of the elements in `range`, or `None` if it is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<SeriesBuf> {
        Some(match self {
            SeriesBuf::Float(v) => SeriesBuf::Float(v.get(range)?.to_vec()),
            SeriesBuf::Int(v) => SeriesBuf::Int(v.get(range)?.to_vec()),
            SeriesBuf::Bool(v) => SeriesBuf::Bool(v.get(range)?.to_vec()),
        })
    }
}

impl<T: Element> From<Vec<T>> for SeriesBuf {
    fn from(values: Vec<T>) -> Self {
        T::wrap_buf(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kinds() {
        let f = [1.0, 2.0];
        let i = [1, 2, 3];
        let b = [true];

        assert_eq!(Input::from(&f[..]).kind(), ElementKind::Float);
        assert_eq!(Input::from(&i[..]).kind(), ElementKind::Int);
        assert_eq!(Input::from(&b[..]).kind(), ElementKind::Bool);
        assert_eq!(Input::from(&i[..]).len(), 3);

        let input = Input::from(&f[..]);
        assert_eq!(input.as_slice::<f64>(), Some(&f[..]));
        assert_eq!(input.as_slice::<i32>(), None);
    }

    #[test]
    fn test_output_tail() {
        let mut values = vec![0.0; 5];
        let mut out = Output::from(&mut values);

        let mut tail = out.tail(2).unwrap();
        assert_eq!(tail.len(), 3);
        tail.as_mut_slice::<f64>().unwrap()[0] = 7.0;

        assert!(out.tail(5).unwrap().is_empty());
        assert!(out.tail(6).is_none());
        assert_eq!(values, vec![0.0, 0.0, 7.0, 0.0, 0.0]);
    }

    #[test]
    fn test_output_clear() {
        let mut values = vec![4, 5];
        Output::from(&mut values).clear();
        assert_eq!(values, vec![0, 0]);
    }

    #[test]
    fn test_series_buf() {
        let mut buf = SeriesBuf::for_kind(ElementKind::Float, 4);
        assert_eq!(buf.kind(), ElementKind::Float);
        assert!(buf.as_slice::<f64>().unwrap().iter().all(|v| v.is_nan()));

        buf.as_output().as_mut_slice::<f64>().unwrap()[3] = 1.5;
        assert_eq!(buf.slice(3..4), Some(SeriesBuf::Float(vec![1.5])));
        assert_eq!(buf.slice(3..5), None);
        assert_eq!(buf.as_input().len(), 4);

        let ints = SeriesBuf::from(vec![1_i32, -1]);
        assert_eq!(ints.kind(), ElementKind::Int);
        assert!(ints.as_slice::<bool>().is_none());
    }
}
