//! Trend indicators.
//!
//! This module contains the moving averages and trend-following indicators:
//! - SMA, TRIMA, EMA, DEMA, TEMA, T3, TRIX, WMA, KAMA and the `matype` selector
//! - MACD, MACDEXT, MACDFIX, APO and PPO
//! - Directional movement (+DM, -DM, +DI, -DI, DX, ADX, ADXR)
//! - Aroon and Aroon Oscillator

pub mod adx;
pub mod aroon;
pub mod ema;
pub mod kama;
pub mod ma;
pub mod macd;
pub mod sma;
pub mod wma;

pub use adx::Direction;
pub use aroon::AroonOutput;
pub use macd::MacdOutput;
