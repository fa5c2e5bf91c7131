//! The calculation engine.
//!
//! [`Engine`] wraps a [`MathLibrary`] and turns a [`BoundCall`] into a
//! [`CalcResult`]. It enforces the warm-up rule: the library only ever sees
//! the output positions at and after the lookback, so the prefix of every
//! output is left exactly as the caller supplied it. Only the reported valid
//! range is meaningful past that prefix.

use core::ops::Range;

use once_cell::sync::OnceCell;

use crate::binding::BoundCall;
use crate::catalogue::Indicator;
use crate::error::{CalcError, RetCode};
use crate::series::Output;
use crate::traits::MathLibrary;

/// Valid range of a completed calculation.
///
/// Positions `valid_start_index .. valid_start_index + valid_count` of every
/// output hold results. Positions before `valid_start_index` are untouched;
/// positions after the valid range are unspecified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalcResult {
    /// First output position holding a valid value.
    pub valid_start_index: usize,
    /// Number of valid values.
    pub valid_count: usize,
}

impl CalcResult {
    /// Valid positions as a range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.valid_start_index..self.valid_start_index + self.valid_count
    }

    /// Whether no position is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid_count == 0
    }
}

/// Dispatches bound calls to a math library.
///
/// Shareable across threads once initialized; calculations on disjoint
/// buffers need no further synchronisation.
#[derive(Debug)]
pub struct Engine<L> {
    library: L,
    ready: OnceCell<()>,
}

impl<L: MathLibrary> Engine<L> {
    /// Create an engine. The library is not initialized yet.
    pub const fn new(library: L) -> Self {
        Self {
            library,
            ready: OnceCell::new(),
        }
    }

    /// The wrapped library.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Whether [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.ready.get().is_some()
    }

    /// Initialize the library.
    ///
    /// Idempotent: after the first success every call returns `Ok` without
    /// touching the library. Concurrent callers block until one attempt
    /// finishes; a failed attempt leaves the engine uninitialized and may be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::ExternalFailure`] with the library's status.
    pub fn initialize(&self) -> Result<(), CalcError> {
        self.ready
            .get_or_try_init(|| match self.library.initialize() {
                Ok(()) => {
                    tracing::info!(library = self.library.name(), "math library initialized");
                    Ok(())
                }
                Err(code) => {
                    tracing::warn!(library = self.library.name(), %code, "math library initialization failed");
                    Err(CalcError::ExternalFailure(code))
                }
            })
            .map(|_| ())
    }

    /// Lookback of `indicator` under this engine's library.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NotInitialized`] before initialization, or
    /// [`CalcError::ExternalFailure`] when the library rejects the parameters.
    pub fn lookback(&self, indicator: &Indicator) -> Result<usize, CalcError> {
        if !self.is_initialized() {
            return Err(CalcError::NotInitialized);
        }
        self.library.lookback(indicator).map_err(CalcError::from_native)
    }

    /// Compute a bound call.
    ///
    /// When the series is no longer than the lookback, returns an empty
    /// result at position 0 and writes nothing.
    ///
    /// # Errors
    ///
    /// - [`CalcError::NotInitialized`] before initialization;
    /// - [`CalcError::ExternalFailure`] when the library reports a failure;
    /// - [`CalcError::FatalError`] when the call or the library breaks an
    ///   engine invariant.
    pub fn calculate(&self, call: BoundCall<'_>) -> Result<CalcResult, CalcError> {
        if !self.is_initialized() {
            return Err(CalcError::NotInitialized);
        }
        let checked = call
            .verify()
            .map_err(|err| CalcError::fatal(format!("bound call no longer matches its shape: {err}")))?;
        if checked != call.len() {
            return Err(CalcError::fatal(format!(
                "bound call length changed from {} to {checked}",
                call.len()
            )));
        }

        let BoundCall {
            indicator,
            inputs,
            mut outputs,
            len,
        } = call;

        let lookback = self
            .library
            .lookback(&indicator)
            .map_err(|code| self.rejected(&indicator, code))?;
        if lookback >= len {
            tracing::debug!(indicator = indicator.name(), len, lookback, "series shorter than lookback");
            return Ok(CalcResult::default());
        }

        let capacity = len - lookback;
        let mut tails: Vec<Output<'_>> = Vec::with_capacity(outputs.len());
        for output in &mut outputs {
            let tail = output
                .tail(lookback)
                .ok_or_else(|| CalcError::fatal("output shorter than its bound length"))?;
            tails.push(tail);
        }

        let written = self
            .library
            .compute(&indicator, &inputs, &mut tails)
            .map_err(|code| self.rejected(&indicator, code))?;
        if written > capacity {
            return Err(CalcError::fatal(format!(
                "{} reported {written} values, only {capacity} fit after lookback {lookback}",
                indicator.name()
            )));
        }

        tracing::debug!(indicator = indicator.name(), len, lookback, written, "calculation complete");
        Ok(CalcResult {
            valid_start_index: lookback,
            valid_count: written,
        })
    }

    fn rejected(&self, indicator: &Indicator, code: RetCode) -> CalcError {
        tracing::warn!(indicator = indicator.name(), library = self.library.name(), %code, "native routine failed");
        CalcError::from_native(code)
    }
}
