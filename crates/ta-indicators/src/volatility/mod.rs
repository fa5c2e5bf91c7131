//! Volatility indicators.
//!
//! This module contains volatility indicators:
//! - TRANGE, ATR and NATR
//! - Bollinger Bands and Acceleration Bands

pub mod atr;
pub mod bollinger;

pub use bollinger::BandsOutput;
