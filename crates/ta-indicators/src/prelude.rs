//! Prelude for ta-indicators.
//!
//! Re-exports the library, the process-wide engine functions and the
//! multi-series kernel outputs.

pub use crate::library::Builtin;
pub use crate::{calculate, calculate_ohlcv, engine, initialize, lookback};

// Kernel outputs and selectors
pub use crate::math::{Binary, Unary};
pub use crate::momentum::StochOutput;
pub use crate::pattern::candle::Candles;
pub use crate::statistic::Fit;
pub use crate::trend::{AroonOutput, Direction, MacdOutput};
pub use crate::volatility::BandsOutput;
