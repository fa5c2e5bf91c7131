//! # ta-indicators
//!
//! Built-in numeric kernels for the `ta-core` calculation engine.
//!
//! [`Builtin`] implements [`MathLibrary`] in plain Rust for the
//! indicators in these groups:
//!
//! - **Overlap studies**: SMA, EMA, WMA, DEMA, TEMA, TRIMA, KAMA, T3, MA,
//!   Bollinger and Acceleration Bands, MIDPOINT, MIDPRICE
//! - **Momentum**: RSI, CMO, MACD (plain, EXT, FIX), APO, PPO, the stochastics,
//!   directional movement, Aroon, CCI, BOP, IMI, MFI, MOM, ROC family, TRIX,
//!   ULTOSC, Williams %R
//! - **Volume and volatility**: AD, ADOSC, OBV, TRANGE, ATR, NATR
//! - **Price transforms, statistics and math**: the full groups
//! - **Patterns**: Doji, Engulfing, Harami, Harami Cross
//!
//! A process-wide engine over [`Builtin`] backs the free functions
//! [`initialize`], [`lookback`], [`calculate`] and [`calculate_ohlcv`].
//!
//! # Example
//!
//! ```
//! use ta_core::prelude::*;
//!
//! let close: Vec<f64> = (1..=10).map(f64::from).collect();
//! let mut out = vec![0.0; close.len()];
//!
//! ta_indicators::initialize().unwrap();
//! let call = bind(
//!     Indicator::Sma { timeperiod: 3 },
//!     [Input::from(&close)],
//!     [Output::from(&mut out)],
//! )
//! .unwrap();
//! let result = ta_indicators::calculate(call).unwrap();
//!
//! assert_eq!((result.valid_start_index, result.valid_count), (2, 8));
//! assert_eq!(out[2], 2.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod args;
mod utils;

pub mod library;
pub mod math;
pub mod momentum;
pub mod pattern;
pub mod price;
pub mod statistic;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

use once_cell::sync::Lazy;
use ta_core::{bind, BoundCall, CalcError, CalcResult, Engine, Error, Indicator, MathLibrary, Ohlcv, SeriesBuf};

pub use library::Builtin;

static ENGINE: Lazy<Engine<Builtin>> = Lazy::new(|| Engine::new(Builtin));

/// The process-wide engine over [`Builtin`].
pub fn engine() -> &'static Engine<Builtin> {
    &ENGINE
}

/// Initialize the process-wide engine. Idempotent.
///
/// # Errors
///
/// Never fails for [`Builtin`]; the signature matches [`Engine::initialize`].
pub fn initialize() -> Result<(), CalcError> {
    ENGINE.initialize()
}

/// Warm-up length of `indicator` on the process-wide engine.
///
/// # Errors
///
/// [`CalcError::NotInitialized`] before [`initialize`], or
/// [`CalcError::ExternalFailure`] for bad parameters and unsupported kinds.
pub fn lookback(indicator: &Indicator) -> Result<usize, CalcError> {
    ENGINE.lookback(indicator)
}

/// Run a bound call on the process-wide engine.
///
/// # Errors
///
/// As [`Engine::calculate`].
pub fn calculate(call: BoundCall<'_>) -> Result<CalcResult, CalcError> {
    ENGINE.calculate(call)
}

/// Bind `indicator` to the matching columns of `data`, allocate its outputs
/// and calculate.
///
/// Output buffers are returned in shape order; positions outside the valid
/// range keep their fill value (NaN, 0 or false).
///
/// # Errors
///
/// A [`BindError`](ta_core::BindError) when a required column is missing or
/// misaligned, otherwise as [`calculate`].
pub fn calculate_ohlcv(indicator: Indicator, data: &Ohlcv) -> Result<(CalcResult, Vec<SeriesBuf>), Error> {
    let shape = indicator.shape();
    let mut buffers = shape.allocate_outputs(data.len());
    let result = {
        let call = bind(indicator, data.inputs_for(shape), buffers.iter_mut().map(SeriesBuf::as_output))?;
        calculate(call)?
    };
    tracing::debug!(
        indicator = indicator.name(),
        library = ENGINE.library().name(),
        valid = result.valid_count,
        "calculated over OHLCV"
    );
    Ok((result, buffers))
}
