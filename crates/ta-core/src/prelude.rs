//! Prelude module for convenient imports.
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let sma = Indicator::Sma { timeperiod: 20 };
//! assert_eq!(sma.shape().input_arity(), 1);
//! ```

// Catalogue and shapes
pub use crate::catalogue::{Group, Indicator, IndicatorKind};
pub use crate::kind::ElementKind;
pub use crate::params::{MaType, ParamSpec, ParamType, ParamValue};
pub use crate::shape::{InputRole, ShapeDescriptor};

// Buffers and binding
pub use crate::binding::{bind, BoundCall};
pub use crate::ohlcv::{Bar, Ohlcv};
pub use crate::series::{Input, Output, SeriesBuf};

// Calculation
pub use crate::engine::{CalcResult, Engine};
pub use crate::traits::MathLibrary;

// Error types
pub use crate::error::{BindError, CalcError, Error, ParseError, RetCode, SchemaError, Side};

// Textual codec
pub use crate::codec::{normalize, parse, render};
