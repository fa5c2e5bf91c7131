//! The seam between the engine and a numeric library.

use crate::catalogue::Indicator;
use crate::error::RetCode;
use crate::series::{Input, Output};

/// A provider of indicator routines with TA-Lib calling conventions.
///
/// The engine owns one implementation and drives it through three calls:
/// a one-time [`initialize`](MathLibrary::initialize), then per calculation
/// [`lookback`](MathLibrary::lookback) followed by
/// [`compute`](MathLibrary::compute).
///
/// Implementations must be safe to call from many threads once initialized.
pub trait MathLibrary: Send + Sync {
    /// Library name for diagnostics.
    fn name(&self) -> &str {
        "unnamed"
    }

    /// Prepare global library state.
    ///
    /// Called at most once successfully per engine; a failed attempt may be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns the native status code on failure.
    fn initialize(&self) -> Result<(), RetCode>;

    /// Number of leading positions that cannot hold a valid value.
    ///
    /// Depends only on the indicator's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RetCode::BadParam`] for out-of-range parameters, or
    /// [`RetCode::NotSupported`] for indicators the library lacks.
    fn lookback(&self, indicator: &Indicator) -> Result<usize, RetCode>;

    /// Compute `indicator` over `inputs`.
    ///
    /// Every output slice starts at the first valid position: element `j` of
    /// an output corresponds to input position `lookback + j`. Returns the
    /// number of valid values, which must not exceed the output length.
    /// Elements past the returned count may have been overwritten and hold
    /// unspecified values.
    ///
    /// # Errors
    ///
    /// Returns the native status code on failure.
    fn compute(
        &self,
        indicator: &Indicator,
        inputs: &[Input<'_>],
        outputs: &mut [Output<'_>],
    ) -> Result<usize, RetCode>;
}

impl<L: MathLibrary + ?Sized> MathLibrary for &L {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&self) -> Result<(), RetCode> {
        (**self).initialize()
    }

    fn lookback(&self, indicator: &Indicator) -> Result<usize, RetCode> {
        (**self).lookback(indicator)
    }

    fn compute(
        &self,
        indicator: &Indicator,
        inputs: &[Input<'_>],
        outputs: &mut [Output<'_>],
    ) -> Result<usize, RetCode> {
        (**self).compute(indicator, inputs, outputs)
    }
}
