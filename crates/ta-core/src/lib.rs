//! # ta-core
//!
//! Type-safe dispatch over the TA-Lib indicator catalogue.
//!
//! This crate turns a typed indicator description plus caller-owned buffers
//! into a checked call against a numeric library:
//!
//! - [`Indicator`] / [`IndicatorKind`] - the catalogue: one variant per
//!   TA-Lib function, with its parameter schema and I/O shape
//! - [`bind`] / [`BoundCall`] - verifies buffers against the shape
//! - [`Engine`] / [`MathLibrary`] - runs a bound call and reports the valid
//!   output range
//! - [`codec`] - the `Name { field = value }` text form
//! - `IndicatorSet` (feature `serde`) - labelled indicators loaded from JSON
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for indicators (as text), OHLCV
//!   data and results, plus JSON indicator sets
//!
//! ## Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let indicator: Indicator = "Stoch { fastk_period = 5; slowk_period = 3; \
//!     slowk_matype = SMA; slowd_period = 3; slowd_matype = SMA }"
//!     .parse()
//!     .unwrap();
//!
//! let close = vec![1.0; 10];
//! let mut out = vec![0.0; 10];
//! let err = bind(indicator, [Input::from(&close)], [Output::from(&mut out)]).unwrap_err();
//! assert!(matches!(err, BindError::ArityMismatch { expected: 3, actual: 1, .. }));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod binding;
pub mod catalogue;
pub mod codec;
#[cfg(feature = "serde")]
pub mod config;
pub mod engine;
pub mod error;
pub mod kind;
pub mod ohlcv;
pub mod params;
pub mod prelude;
pub mod series;
pub mod shape;
pub mod traits;

// Re-export core types at crate root
pub use binding::{bind, BoundCall};
pub use catalogue::{Group, Indicator, IndicatorKind};
#[cfg(feature = "serde")]
pub use config::IndicatorSet;
pub use engine::{CalcResult, Engine};
#[cfg(feature = "serde")]
pub use error::ConfigError;
pub use error::{
    BindError, BindResult, CalcError, Error, ParseError, ParseResult, RetCode, SchemaError, Side,
};
pub use kind::ElementKind;
pub use ohlcv::{Bar, Ohlcv};
pub use params::{MaType, ParamSpec, ParamType, ParamValue};
pub use series::{Element, Input, Output, SeriesBuf};
pub use shape::{InputRole, InputSpec, OutputSpec, ShapeDescriptor};
pub use traits::MathLibrary;
